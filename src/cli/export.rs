//! Export command handler: non-interactive report generation.

use super::exit_codes;
use crate::config::AppConfig;
use crate::data::DataStore;
use crate::model::Device;
use crate::reports::{self, ReportFormat};
use crate::view::{derive_view, from_query, ViewState};
use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::PathBuf;

/// Generate a report of the (optionally filtered) dataset on stdout or
/// into a file.
///
/// The dataset comes from the local cache when present; otherwise a
/// blocking fetch fills it (and the cache), so `fixgrade fetch` followed
/// by offline exports works.
pub fn run_export(
    config: &AppConfig,
    format: &str,
    state: Option<&str>,
    output: Option<&PathBuf>,
) -> Result<i32> {
    let Some(format) = ReportFormat::parse(format) else {
        bail!("unknown export format {format:?} (expected csv, json, or structured)");
    };

    let store = DataStore::new(&config.data).context("opening dataset store")?;
    let dataset: Vec<Device> = match store.load_cached() {
        Some(devices) => devices,
        None if config.data.offline => {
            bail!("no cached dataset and offline mode is on - run `fixgrade fetch` first")
        }
        None => store.fetch_blocking().context("fetching dataset")?,
    };

    let view_state = match state {
        Some(query) => from_query(query).context("parsing --state share string")?,
        None => ViewState::default(),
    };
    let indices = derive_view(&dataset, &view_state.filter, &view_state.sort);
    let view: Vec<&Device> = indices.iter().map(|&i| &dataset[i]).collect();

    let content = reports::generate(&view, format).context("generating report")?;

    match output {
        Some(path) => {
            std::fs::write(path, &content)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(rows = view.len(), path = %path.display(), "report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
        }
    }

    if view.is_empty() {
        return Ok(exit_codes::NO_RESULTS);
    }
    Ok(exit_codes::SUCCESS)
}
