//! **An interactive browser for device repairability scores.**
//!
//! `fixgrade` fetches a pre-computed dataset of devices and their
//! repairability scores, renders it as a sortable, filterable table with
//! an aggregate score histogram, and offers comparison and export
//! conveniences - all in the terminal.
//!
//! ## Key Features
//!
//! - **Offline-friendly loading**: the last fetched dataset is cached
//!   locally and rendered immediately while the canonical copy is fetched
//!   in the background (stale-while-revalidate).
//! - **Pure derivation pipeline**: filtering and sorting are pure, stable
//!   functions from `(dataset, state)` to an ordered view; every surface
//!   (table, histogram, counts, exports, structured metadata) is computed
//!   from the same view.
//! - **Comparison**: up to five devices side by side, independent of the
//!   active filters.
//! - **Shareable views**: filter/sort state round-trips through a compact
//!   query string (`q=pixel&sort=repairability_score:desc`), accepted via
//!   `--state` and copyable from the TUI.
//! - **Exports**: CSV, pretty JSON, and a machine-readable item list of
//!   the current view.
//! - **Methodology**: the scoring rubric document renders as a
//!   criteria-by-version matrix with per-version detail.
//!
//! ## Core Modules
//!
//! - [`model`]: the [`Device`](model::Device) records and the
//!   [`Rubric`](model::Rubric) document.
//! - [`data`]: HTTP client, single-entry dataset cache, and the
//!   generation-stamped load orchestrator.
//! - [`view`]: the pure state/derivation layer - filter/sort engine,
//!   selection tracker, histogram buckets, teardown aggregation,
//!   structured metadata, and the share-string codec.
//! - [`reports`]: CSV/JSON/structured report generation.
//! - [`tui`]: the ratatui front end painting what [`view`] computes.
//! - [`config`]: typed configuration with YAML file discovery.
//! - [`error`]: the [`FixgradeError`](error::FixgradeError) hierarchy.

#![allow(clippy::too_many_lines, clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod reports;
pub mod tui;
pub mod view;

pub use error::{FixgradeError, Result};
