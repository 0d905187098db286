//! Per-surface render functions.
//!
//! Each view paints one region of the frame from the app state; none of
//! them mutate anything except the geometry fields the app uses for
//! anchoring and mouse hit-testing.

mod chart;
mod compare;
mod methodology;
mod overlays;
mod table;

pub(crate) use chart::render_chart;
pub(crate) use compare::render_compare;
pub(crate) use methodology::render_methodology;
pub(crate) use overlays::render_overlays;
pub(crate) use table::render_table;
