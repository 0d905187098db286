//! TUI export functionality.
//!
//! Writes the current derived view to a timestamped file using the
//! reports module. Failures surface as a status message, never as an
//! aborted session.

use crate::model::Device;
use crate::reports::{self, ReportFormat};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Result of an export operation.
#[derive(Debug)]
pub struct ExportResult {
    pub path: PathBuf,
    pub success: bool,
    pub message: String,
}

/// Export the current view to a file in the given format.
pub fn export_view(
    format: ReportFormat,
    view: &[&Device],
    output_dir: Option<&PathBuf>,
) -> ExportResult {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("fixgrade_{timestamp}.{}", format.extension());
    let path = output_dir.map_or_else(
        || PathBuf::from(&filename),
        |dir| dir.join(&filename),
    );

    let content = match reports::generate(view, format) {
        Ok(content) => content,
        Err(err) => {
            return ExportResult {
                path,
                success: false,
                message: format!("Export failed: {err}"),
            }
        }
    };

    match File::create(&path).and_then(|mut f| f.write_all(content.as_bytes())) {
        Ok(()) => ExportResult {
            message: format!("Exported {} rows to {}", view.len(), path.display()),
            path,
            success: true,
        },
        Err(err) => ExportResult {
            message: format!("Could not write {}: {err}", path.display()),
            path,
            success: false,
        },
    }
}

/// Export the pre-computed structured item-list document.
pub fn export_structured(doc: &serde_json::Value, output_dir: Option<&PathBuf>) -> ExportResult {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("fixgrade_structured_{timestamp}.json");
    let path = output_dir.map_or_else(
        || PathBuf::from(&filename),
        |dir| dir.join(&filename),
    );

    let content = match serde_json::to_string_pretty(doc) {
        Ok(content) => content,
        Err(err) => {
            return ExportResult {
                path,
                success: false,
                message: format!("Export failed: {err}"),
            }
        }
    };

    match File::create(&path).and_then(|mut f| f.write_all(content.as_bytes())) {
        Ok(()) => ExportResult {
            message: format!("Exported structured metadata to {}", path.display()),
            path,
            success: true,
        },
        Err(err) => ExportResult {
            message: format!("Could not write {}: {err}", path.display()),
            path,
            success: false,
        },
    }
}
