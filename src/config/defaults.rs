//! Default configuration values.

/// Base URL the dataset and rubric documents are served from.
pub const DEFAULT_BASE_URL: &str = "https://data.fixgrade.dev";

/// HTTP timeout for dataset and rubric fetches.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Maximum entries in the structured item-list document.
pub const DEFAULT_STRUCTURED_LIMIT: usize = 25;
