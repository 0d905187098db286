//! Overlay state management.
//!
//! All transient floating panels go through one state object so that at
//! most one overlay exists at a time: showing any overlay closes the
//! previous one, and re-triggering the visible overlay closes it.

/// Available overlay kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// Per-row teardown guide dropdown
    Teardowns,
    /// Export format menu
    ExportMenu,
    /// Data freshness / dataset info tooltip
    Info,
    /// Keyboard shortcuts
    Help,
    /// Comparison drawer
    Compare,
    /// Rubric version detail dialog
    RubricVersion,
}

/// Manages overlay visibility with mutual exclusion.
#[derive(Debug, Clone, Default)]
pub struct OverlayState {
    current: Option<OverlayKind>,
}

impl OverlayState {
    #[must_use]
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Check if any overlay is currently visible.
    #[must_use]
    pub fn has_overlay(&self) -> bool {
        self.current.is_some()
    }

    /// Check if a specific overlay is visible.
    #[must_use]
    pub fn is_showing(&self, kind: OverlayKind) -> bool {
        self.current == Some(kind)
    }

    /// Get the currently visible overlay.
    #[must_use]
    pub fn current(&self) -> Option<OverlayKind> {
        self.current
    }

    /// Show a specific overlay, closing any other.
    pub fn show(&mut self, kind: OverlayKind) {
        self.current = Some(kind);
    }

    /// Close the current overlay.
    pub fn close(&mut self) {
        self.current = None;
    }

    /// Toggle a specific overlay: close it if showing, otherwise show it
    /// (closing whatever else was open).
    pub fn toggle(&mut self, kind: OverlayKind) {
        if self.current == Some(kind) {
            self.current = None;
        } else {
            self.current = Some(kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutual_exclusion() {
        let mut state = OverlayState::new();
        assert!(!state.has_overlay());

        state.show(OverlayKind::Teardowns);
        assert!(state.is_showing(OverlayKind::Teardowns));

        state.show(OverlayKind::ExportMenu);
        assert!(state.is_showing(OverlayKind::ExportMenu));
        assert!(!state.is_showing(OverlayKind::Teardowns));
    }

    #[test]
    fn test_trigger_reclick_closes() {
        let mut state = OverlayState::new();

        state.toggle(OverlayKind::Info);
        assert!(state.is_showing(OverlayKind::Info));

        state.toggle(OverlayKind::Info);
        assert!(!state.has_overlay());
    }

    #[test]
    fn test_toggle_switches_kind() {
        let mut state = OverlayState::new();
        state.toggle(OverlayKind::Help);
        state.toggle(OverlayKind::Compare);
        assert!(state.is_showing(OverlayKind::Compare));
        assert!(!state.is_showing(OverlayKind::Help));
    }

    #[test]
    fn test_close() {
        let mut state = OverlayState::new();
        state.show(OverlayKind::Help);
        state.close();
        assert!(!state.has_overlay());
        assert_eq!(state.current(), None);
    }
}
