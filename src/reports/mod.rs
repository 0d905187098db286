//! Report generation for the current derived view.
//!
//! Three formats, all derived from the same ordered view the table shows:
//! CSV for spreadsheets, pretty JSON for downstream tooling, and the
//! structured item-list document for indexers.

mod csv;
pub mod escape;
mod json;

pub use csv::csv_report;
pub use json::json_report;

use crate::error::Result;
use crate::model::Device;
use crate::view::item_list;

/// Export format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Json,
    Structured,
}

impl ReportFormat {
    /// File extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::Structured => "json",
        }
    }

    /// Parse a user-supplied format name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "structured" => Some(Self::Structured),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Json => "JSON",
            Self::Structured => "Structured metadata",
        }
    }
}

/// Generate a report of the given view in the given format.
pub fn generate(view: &[&Device], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Csv => Ok(csv_report(view)),
        ReportFormat::Json => json_report(view),
        ReportFormat::Structured => Ok(serde_json::to_string_pretty(&item_list(view))?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!(ReportFormat::parse("CSV"), Some(ReportFormat::Csv));
        assert_eq!(ReportFormat::parse("json"), Some(ReportFormat::Json));
        assert_eq!(
            ReportFormat::parse("structured"),
            Some(ReportFormat::Structured)
        );
        assert_eq!(ReportFormat::parse("xml"), None);
    }

    #[test]
    fn test_generate_empty_view() {
        for format in [ReportFormat::Csv, ReportFormat::Json, ReportFormat::Structured] {
            let out = generate(&[], format).unwrap();
            assert!(!out.is_empty());
        }
    }
}
