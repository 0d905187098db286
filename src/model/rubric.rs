//! Rubric methodology document.
//!
//! An auxiliary, independently failing data source describing how scores
//! were assigned across rubric versions. Drives the methodology view and
//! the per-version detail dialog; the device table never depends on it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The full rubric document served at `<base>/rubric.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Rubric {
    /// Rubric versions, oldest first
    pub versions: Vec<String>,

    /// Scoring criteria across versions
    #[serde(default)]
    pub criteria: Vec<Criterion>,

    /// Per-version list of factors explicitly not considered
    #[serde(default)]
    pub factors_not_considered: Vec<VersionItems>,

    /// Per-version revision notes
    #[serde(default)]
    pub revisions: Vec<VersionItems>,
}

impl Rubric {
    /// Criteria included in the given version (by position in `versions`).
    #[must_use]
    pub fn criteria_for(&self, version_idx: usize) -> Vec<&Criterion> {
        self.criteria
            .iter()
            .filter(|c| c.included.get(version_idx).copied().unwrap_or(false))
            .collect()
    }

    /// Items of a per-version list for the given version name.
    #[must_use]
    pub fn items_for<'a>(list: &'a [VersionItems], version: &str) -> &'a [String] {
        list.iter()
            .find(|v| v.version == version)
            .map_or(&[], |v| v.items.as_slice())
    }
}

/// One scoring criterion and its treatment across versions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Criterion {
    pub name: String,

    /// Whether the criterion participates in each version, positionally
    /// aligned with `Rubric::versions`
    #[serde(default)]
    pub included: Vec<bool>,

    /// Version name -> weight
    #[serde(default)]
    pub weights: BTreeMap<String, f64>,

    /// Version name -> explanatory note
    #[serde(default)]
    pub notes: BTreeMap<String, String>,
}

/// A version-keyed list of free-text items.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VersionItems {
    pub version: String,
    #[serde(default)]
    pub items: Vec<String>,
}
