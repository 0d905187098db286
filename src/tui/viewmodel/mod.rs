//! Shared view-model layer for the TUI.
//!
//! Render-free state components embedded in the [`App`](crate::tui::App):
//!
//! - [`OverlayState`] - transient overlay management with mutual exclusion
//! - [`StatusMessage`] - temporary status display with auto-clear
//! - [`SearchInput`] - debounced free-text search entry

mod overlay;
mod search;
mod status;

pub use overlay::{OverlayKind, OverlayState};
pub use search::SearchInput;
pub use status::StatusMessage;
