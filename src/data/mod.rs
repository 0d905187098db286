//! Data acquisition: HTTP client, on-disk cache, and the load orchestrator.
//!
//! The [`DataStore`] implements the stale-while-revalidate load path: a
//! synchronous, best-effort cache read publishes immediately, and a
//! background fetch replaces it when (and only when) it is still the
//! freshest outstanding request.

mod cache;
mod client;
mod loader;
mod store;

pub use cache::DatasetCache;
pub use client::DataClient;
pub use loader::LoadState;
pub use store::{DataEvent, DataStore};
