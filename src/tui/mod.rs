//! Interactive terminal UI.
//!
//! Architecture: [`App`] is the single owner of all mutable state; the
//! event pump ([`events`]) merges terminal input, tick frames, and
//! background data results into one ordered stream; [`ui`] paints frames
//! from the state; `views` and `widgets` hold the per-surface painters
//! and shared helpers. State mutation plus view recomputation happen
//! inside one event-handler step, so every painted frame is consistent.

mod app;
pub(crate) mod clipboard;
pub(crate) mod constants;
mod events;
pub(crate) mod export;
mod motion;
pub mod state;
pub mod theme;
mod ui;
pub mod viewmodel;
pub(crate) mod views;
pub(crate) mod widgets;

pub use app::{App, Tab};
pub use events::{Event, EventHandler};
pub use theme::{colors, current_theme_name, set_theme, toggle_theme, ColorScheme, ThemeName};
pub use ui::run_tui;
pub use viewmodel::{OverlayKind, OverlayState, SearchInput, StatusMessage};
