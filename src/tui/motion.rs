//! Decorative header shimmer.
//!
//! A purely cosmetic strip of drifting dots behind the title. It advances
//! on tick frames only while the terminal is focused, and never starts at
//! all when the user prefers reduced motion (persisted preference or the
//! `FIXGRADE_REDUCED_MOTION` environment variable). Pausing on focus loss
//! keeps the app from burning frames nobody is looking at.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const GLYPHS: [char; 4] = ['·', '∙', '•', '∙'];

/// Animation state for the header shimmer.
#[derive(Debug, Clone)]
pub struct MotionState {
    enabled: bool,
    focused: bool,
    phase: u64,
}

impl MotionState {
    /// Build from the effective reduced-motion preference.
    #[must_use]
    pub fn new(reduced_motion: bool) -> Self {
        let env_reduced = std::env::var("FIXGRADE_REDUCED_MOTION")
            .map(|v| v == "1")
            .unwrap_or(false);
        Self {
            enabled: !(reduced_motion || env_reduced),
            focused: true,
            phase: 0,
        }
    }

    /// Advance one tick frame. No-op while paused or disabled.
    pub fn tick(&mut self) {
        if self.enabled && self.focused {
            self.phase = self.phase.wrapping_add(1);
        }
    }

    /// Terminal gained or lost focus.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.enabled && self.focused
    }

    /// Render the shimmer into the given area. Does nothing when motion
    /// is disabled, so the header is simply static.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.enabled || area.width == 0 {
            return;
        }
        let scheme = crate::tui::theme::colors();
        let mut spans = Vec::with_capacity(area.width as usize);
        for col in 0..area.width {
            // Cheap deterministic hash of (phase, column) drives sparse dots
            let seed = (u64::from(col) * 2_654_435_761).wrapping_add(self.phase / 3);
            let mixed = seed ^ (seed >> 13);
            if mixed % 11 == 0 {
                let glyph = GLYPHS[(mixed >> 4) as usize % GLYPHS.len()];
                spans.push(Span::styled(
                    glyph.to_string(),
                    Style::default().fg(scheme.muted),
                ));
            } else {
                spans.push(Span::raw(" "));
            }
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_motion_never_runs() {
        let mut motion = MotionState::new(true);
        assert!(!motion.is_running());
        motion.tick();
        assert_eq!(motion.phase, 0);
    }

    #[test]
    fn test_focus_pauses_ticks() {
        let mut motion = MotionState {
            enabled: true,
            focused: true,
            phase: 0,
        };
        motion.tick();
        assert_eq!(motion.phase, 1);

        motion.set_focused(false);
        assert!(!motion.is_running());
        motion.tick();
        assert_eq!(motion.phase, 1);

        motion.set_focused(true);
        motion.tick();
        assert_eq!(motion.phase, 2);
    }
}
