//! Unified error types for fixgrade.
//!
//! Every fallible boundary in the library returns [`Result`]; failures are
//! converted into user-visible, non-blocking signals at the event-handler
//! level rather than propagating past it.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fixgrade operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FixgradeError {
    /// Errors while fetching remote documents
    #[error("Fetch failed: {context}")]
    Fetch {
        context: String,
        #[source]
        source: FetchErrorKind,
    },

    /// Errors in the local dataset cache
    #[error("Cache operation failed: {context}")]
    Cache {
        context: String,
        #[source]
        source: CacheErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// State/share-string errors
    #[error("Invalid view state: {0}")]
    State(String),
}

/// Specific fetch error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FetchErrorKind {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    #[error("Fetching is disabled: {0}")]
    Disabled(String),
}

/// Specific cache error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CacheErrorKind {
    #[error("Cache directory unavailable")]
    NoCacheDir,

    #[error("Corrupt cached payload: {0}")]
    Corrupt(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Output format not supported for this operation: {0}")]
    UnsupportedFormat(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for fixgrade operations
pub type Result<T> = std::result::Result<T, FixgradeError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl FixgradeError {
    /// Create a fetch error with context
    pub fn fetch(context: impl Into<String>, source: FetchErrorKind) -> Self {
        Self::Fetch {
            context: context.into(),
            source,
        }
    }

    /// Create a fetch error for a non-success HTTP status
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::fetch(
            "unexpected response status",
            FetchErrorKind::Status {
                status,
                url: url.into(),
            },
        )
    }

    /// Create a cache error with context
    pub fn cache(context: impl Into<String>, source: CacheErrorKind) -> Self {
        Self::Cache {
            context: context.into(),
            source,
        }
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::State(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for FixgradeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for FixgradeError {
    fn from(err: serde_json::Error) -> Self {
        Self::report(
            "JSON serialization",
            ReportErrorKind::JsonSerializationError(err.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FixgradeError::http_status("https://example.org/devices.json", 500);
        let display = err.to_string();
        assert!(
            display.contains("Fetch failed"),
            "Error message should mention fetching: {}",
            display
        );

        let err = FixgradeError::config("base_url must not be empty");
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn test_error_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = FixgradeError::io("/path/to/devices.json", io_err);

        assert!(err.to_string().contains("/path/to/devices.json"));
    }

    #[test]
    fn test_status_source_is_preserved() {
        let err = FixgradeError::http_status("https://example.org/rubric.json", 404);
        match err {
            FixgradeError::Fetch { source, .. } => match source {
                FetchErrorKind::Status { status, url } => {
                    assert_eq!(status, 404);
                    assert!(url.ends_with("rubric.json"));
                }
                other => panic!("Expected Status kind, got {other:?}"),
            },
            other => panic!("Expected Fetch error, got {other:?}"),
        }
    }
}
