//! Named constants for TUI layout and timing.

use std::time::Duration;

/// Number of items to scroll per page-up/page-down action.
pub(crate) const PAGE_SIZE: usize = 10;

/// Event-pump poll interval; also the tick cadence.
pub(crate) const TICK_RATE: Duration = Duration::from_millis(100);

/// Quiet period before a typed search query triggers a re-render.
pub(crate) const SEARCH_DEBOUNCE: Duration = Duration::from_millis(250);

/// How long transient status messages stay on screen.
pub(crate) const STATUS_TTL: Duration = Duration::from_secs(4);

/// Width of anchored dropdown overlays.
pub(crate) const DROPDOWN_WIDTH: u16 = 56;
