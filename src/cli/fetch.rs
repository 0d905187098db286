//! Fetch command handler: refresh the dataset cache.

use super::exit_codes;
use crate::config::AppConfig;
use crate::data::DataStore;
use anyhow::{bail, Context, Result};

/// Fetch the canonical dataset, overwrite the cache, and print a summary
/// including the upstream freshness timestamp.
pub fn run_fetch(config: &AppConfig, clear_cache: bool) -> Result<i32> {
    if config.data.offline {
        bail!("cannot fetch in offline mode");
    }

    let store = DataStore::new(&config.data).context("opening dataset store")?;

    if clear_cache {
        store.cache().clear().context("clearing cache")?;
    }

    let devices = store.fetch_blocking().context("fetching dataset")?;
    let scored = devices.iter().filter(|d| d.has_score()).count();
    println!(
        "Fetched {} devices ({} scored, {} unscored) -> {}",
        devices.len(),
        scored,
        devices.len() - scored,
        store.cache().path().display()
    );

    match store.freshness_blocking() {
        Ok(Some(timestamp)) => {
            println!("Upstream last modified: {}", timestamp.format("%Y-%m-%d %H:%M UTC"));
        }
        Ok(None) => println!("Upstream did not report a modification time"),
        Err(err) => tracing::warn!(%err, "freshness probe failed"),
    }

    Ok(exit_codes::SUCCESS)
}
