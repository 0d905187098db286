//! Single-entry on-disk cache for the device dataset.
//!
//! One file under the platform cache dir holds the last successfully
//! fetched payload as JSON text. It is read optimistically at startup and
//! overwritten after every successful fetch. A corrupt entry is deleted on
//! read so it cannot wedge future startups.

use crate::error::{CacheErrorKind, FixgradeError, Result};
use crate::model::Device;
use std::fs;
use std::path::PathBuf;

const CACHE_FILE: &str = "devices_with_scores.json";

/// Dataset cache rooted at a single file.
#[derive(Debug, Clone)]
pub struct DatasetCache {
    path: PathBuf,
}

impl DatasetCache {
    /// Cache in the platform cache directory.
    pub fn new(dir_override: Option<PathBuf>) -> Result<Self> {
        let dir = dir_override
            .or_else(|| dirs::cache_dir().map(|p| p.join("fixgrade")))
            .ok_or_else(|| FixgradeError::cache("locating cache dir", CacheErrorKind::NoCacheDir))?;
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| FixgradeError::io(dir.clone(), e))?;
        }
        Ok(Self {
            path: dir.join(CACHE_FILE),
        })
    }

    /// Path of the cache file.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Optimistic read of the cached dataset.
    ///
    /// Returns `None` on any failure. A present-but-unparsable entry is
    /// removed so the next startup goes straight to the network.
    #[must_use]
    pub fn read(&self) -> Option<Vec<Device>> {
        let content = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(devices) => Some(devices),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "discarding corrupt dataset cache");
                let _ = fs::remove_file(&self.path);
                None
            }
        }
    }

    /// Overwrite the cache with a freshly fetched dataset.
    pub fn write(&self, devices: &[Device]) -> Result<()> {
        let data = serde_json::to_string(devices)?;
        fs::write(&self.path, data).map_err(|e| {
            FixgradeError::cache(
                format!("writing {}", self.path.display()),
                CacheErrorKind::WriteFailed(e.to_string()),
            )
        })
    }

    /// Remove the cached entry, if present.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| FixgradeError::io(self.path.clone(), e))?;
        }
        Ok(())
    }
}
