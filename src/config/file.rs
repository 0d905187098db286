//! Config file discovery and loading.
//!
//! Search order: an explicit `--config` path, `.fixgrade.yaml` in the
//! working directory, then `fixgrade/config.yaml` under the user config
//! dir. The first file found wins; there is no merging across files.

use super::AppConfig;
use crate::error::{FixgradeError, Result};
use std::path::{Path, PathBuf};

/// Name of the project-local config file.
pub const LOCAL_CONFIG_NAME: &str = ".fixgrade.yaml";

/// Load a config file from an explicit path.
pub fn load(path: &Path) -> Result<AppConfig> {
    let content =
        std::fs::read_to_string(path).map_err(|e| FixgradeError::io(path.to_path_buf(), e))?;
    let config: AppConfig = serde_yaml::from_str(&content)
        .map_err(|e| FixgradeError::config(format!("{}: {e}", path.display())))?;
    config.validate()?;
    Ok(config)
}

/// Discover a config file in the standard locations.
#[must_use]
pub fn discover() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_NAME);
    if local.is_file() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|p| p.join("fixgrade").join("config.yaml"))
        .filter(|p| p.is_file())
}

/// Load configuration: an explicit path is required to exist; otherwise a
/// discovered file is used, falling back to defaults when none is found.
///
/// Returns the config and the path it was loaded from, if any.
pub fn load_or_default(explicit: Option<&Path>) -> Result<(AppConfig, Option<PathBuf>)> {
    if let Some(path) = explicit {
        return Ok((load(path)?, Some(path.to_path_buf())));
    }
    match discover() {
        Some(path) => {
            let config = load(&path)?;
            Ok((config, Some(path)))
        }
        None => Ok((AppConfig::default(), None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_parses_partial_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "data:\n  base_url: https://mirror.example.org\ntui:\n  theme: light"
        )
        .unwrap();

        let config = load(file.path()).unwrap();
        assert_eq!(config.data.base_url, "https://mirror.example.org");
        assert_eq!(config.tui.theme, "light");
        // Unspecified sections keep defaults
        assert!(!config.data.offline);
    }

    #[test]
    fn test_load_rejects_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "data: [not, a, mapping").unwrap();
        assert!(load(file.path()).is_err());
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let result = load_or_default(Some(Path::new("/nonexistent/fixgrade.yaml")));
        assert!(result.is_err());
    }
}
