//! Configuration type definitions.

use super::defaults::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::{FixgradeError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub output: OutputConfig,
    pub tui: TuiConfig,
}

impl AppConfig {
    /// Validate configuration values, rejecting anything the rest of the
    /// application would otherwise fail on much later.
    pub fn validate(&self) -> Result<()> {
        if self.data.base_url.trim().is_empty() {
            return Err(FixgradeError::config("data.base_url must not be empty"));
        }
        if self.data.timeout_secs == 0 {
            return Err(FixgradeError::config(
                "data.timeout_secs must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Data source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Base URL; the dataset lives at `<base_url>/devices_with_scores.json`
    pub base_url: String,
    /// HTTP timeout in seconds
    pub timeout_secs: u64,
    /// Cache directory override (defaults to the platform cache dir)
    pub cache_dir: Option<PathBuf>,
    /// Skip the network entirely and rely on the cache
    pub offline: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            cache_dir: None,
            offline: false,
        }
    }
}

impl DataConfig {
    /// URL of the devices dataset document.
    #[must_use]
    pub fn devices_url(&self) -> String {
        format!("{}/devices_with_scores.json", self.base_url.trim_end_matches('/'))
    }

    /// URL of the rubric document.
    #[must_use]
    pub fn rubric_url(&self) -> String {
        format!("{}/rubric.json", self.base_url.trim_end_matches('/'))
    }
}

/// Export output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory exported files are written to (defaults to the cwd)
    pub dir: Option<PathBuf>,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark" or "light"
    pub theme: String,
    /// Disable the decorative header shimmer
    pub reduced_motion: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            reduced_motion: false,
        }
    }
}

// ============================================================================
// TUI Preferences (persisted)
// ============================================================================

/// TUI preferences that persist across sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiPreferences {
    /// Theme name: "dark" or "light"
    pub theme: String,
    /// Reduced-motion preference; when set the shimmer never starts
    #[serde(default)]
    pub reduced_motion: bool,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            reduced_motion: false,
        }
    }
}

impl TuiPreferences {
    /// Get the path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fixgrade").join("preferences.json"))
    }

    /// Load preferences from disk, or return defaults if not found.
    #[must_use]
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save preferences to disk.
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(self)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            std::fs::write(path, json)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let mut config = AppConfig::default();
        config.data.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_devices_url_strips_trailing_slash() {
        let config = DataConfig {
            base_url: "https://data.fixgrade.dev/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.devices_url(),
            "https://data.fixgrade.dev/devices_with_scores.json"
        );
        assert_eq!(config.rubric_url(), "https://data.fixgrade.dev/rubric.json");
    }
}
