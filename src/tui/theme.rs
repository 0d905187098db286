//! Centralized theme and color scheme for the TUI.

use ratatui::prelude::*;
use std::sync::RwLock;

/// Semantic colors for the application.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Score band colors
    pub score_good: Color,
    pub score_fair: Color,
    pub score_poor: Color,
    pub score_unknown: Color,

    // UI element colors
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Badge foreground for text on colored backgrounds
    pub badge_fg: Color,

    // Row backgrounds
    pub selection_bg: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    const fn dark_const() -> Self {
        Self {
            score_good: Color::Green,
            score_fair: Color::Yellow,
            score_poor: Color::Red,
            score_unknown: Color::DarkGray,

            primary: Color::Cyan,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            badge_fg: Color::Black,
            selection_bg: Color::Rgb(50, 50, 70),
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self::dark_const()
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            score_good: Color::Rgb(0, 128, 0),
            score_fair: Color::Rgb(160, 120, 0),
            score_poor: Color::Rgb(180, 0, 0),
            score_unknown: Color::Gray,

            primary: Color::Blue,
            accent: Color::Rgb(160, 100, 0),
            muted: Color::Gray,
            border: Color::Gray,
            border_focused: Color::Blue,
            background_alt: Color::Rgb(235, 235, 240),
            text: Color::Black,
            text_muted: Color::DarkGray,

            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(160, 120, 0),
            error: Color::Rgb(180, 0, 0),

            badge_fg: Color::White,
            selection_bg: Color::Rgb(210, 220, 240),
        }
    }

    /// Badge color for a repairability score.
    #[must_use]
    pub fn score_color(&self, score: Option<f64>) -> Color {
        match score {
            Some(s) if s >= 8.0 => self.score_good,
            Some(s) if s >= 5.0 => self.score_fair,
            Some(_) => self.score_poor,
            None => self.score_unknown,
        }
    }
}

static THEME: RwLock<(ColorScheme, ThemeName)> =
    RwLock::new((ColorScheme::dark_const(), ThemeName::Dark));

/// Available theme names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeName {
    Dark,
    Light,
}

impl ThemeName {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "light" => Self::Light,
            _ => Self::Dark,
        }
    }
}

/// The active color scheme.
#[must_use]
pub fn colors() -> ColorScheme {
    THEME.read().map(|guard| guard.0).unwrap_or_default()
}

/// The active theme name.
#[must_use]
pub fn current_theme_name() -> ThemeName {
    THEME
        .read()
        .map(|guard| guard.1)
        .unwrap_or(ThemeName::Dark)
}

/// Set the active theme.
pub fn set_theme(name: ThemeName) {
    if let Ok(mut guard) = THEME.write() {
        guard.0 = match name {
            ThemeName::Dark => ColorScheme::dark(),
            ThemeName::Light => ColorScheme::light(),
        };
        guard.1 = name;
    }
}

/// Toggle between dark and light, returning the new theme name.
pub fn toggle_theme() -> ThemeName {
    let next = match current_theme_name() {
        ThemeName::Dark => ThemeName::Light,
        ThemeName::Light => ThemeName::Dark,
    };
    set_theme(next);
    next
}

/// Common composed styles.
pub struct Styles;

impl Styles {
    #[must_use]
    pub fn selected() -> Style {
        Style::default()
            .bg(colors().selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn header() -> Style {
        Style::default()
            .fg(colors().primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn muted() -> Style {
        Style::default().fg(colors().text_muted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_color_thresholds() {
        let scheme = ColorScheme::dark();
        assert_eq!(scheme.score_color(Some(8.0)), scheme.score_good);
        assert_eq!(scheme.score_color(Some(10.0)), scheme.score_good);
        assert_eq!(scheme.score_color(Some(7.9)), scheme.score_fair);
        assert_eq!(scheme.score_color(Some(5.0)), scheme.score_fair);
        assert_eq!(scheme.score_color(Some(4.9)), scheme.score_poor);
        assert_eq!(scheme.score_color(Some(0.0)), scheme.score_poor);
        assert_eq!(scheme.score_color(None), scheme.score_unknown);
    }

    #[test]
    fn test_theme_name_parse() {
        assert_eq!(ThemeName::parse("light"), ThemeName::Light);
        assert_eq!(ThemeName::parse("dark"), ThemeName::Dark);
        assert_eq!(ThemeName::parse("anything-else"), ThemeName::Dark);
    }
}
