//! Pure view derivation: filter/sort state, the derivation engine,
//! selection tracking, teardown aggregation, histogram buckets, structured
//! metadata, and the shareable state string.
//!
//! Nothing in this module touches a rendering surface; everything is a
//! function of the dataset and explicit state, so it tests without a
//! terminal. The TUI layer is an adapter painting what this module
//! computes.

mod buckets;
mod engine;
mod query;
mod selection;
mod state;
mod structured;
mod teardowns;

pub use buckets::{score_buckets, SCORE_BUCKETS};
pub use engine::derive_view;
pub use query::{from_query, to_query};
pub use selection::{SelectionSet, Toggle, MAX_COMPARE};
pub use state::{FilterState, SortDirection, SortKey, SortState, ViewState};
pub use structured::item_list;
pub use teardowns::{badge_tags, ordered_teardowns};
