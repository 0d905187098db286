//! Device records and teardown guide entries.
//!
//! The dataset is a JSON array of device entries produced by an upstream
//! generator. Field presence is inconsistent across entries (older devices
//! lack brands, unscored devices carry `null` scores), so everything beyond
//! the name is optional.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One product entity with a name, brand, link and optional repairability
/// score (integer 0-10 when present, but tolerated as any JSON number).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Device {
    /// Display name, the only required field
    pub name: String,

    /// Upstream category title, when it differs from the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Repairability score. `None` for unscored devices.
    #[serde(default)]
    pub repairability_score: Option<f64>,

    /// Rubric version the score was produced under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scorecard_version: Option<String>,

    /// Manufacturer/brand
    #[serde(default)]
    pub brand: Option<String>,

    /// Product page URL
    #[serde(default)]
    pub link: Option<String>,

    /// Linked teardown guides, ordered as the generator emitted them
    #[serde(default)]
    pub teardown_urls: Vec<Teardown>,
}

impl Device {
    /// Stable identity for selection tracking. The dataset carries no id
    /// field, so the key is the name+brand composite, case-folded.
    #[must_use]
    pub fn key(&self) -> DeviceKey {
        DeviceKey::new(&self.name, self.brand.as_deref())
    }

    /// Whether a repairability score is present.
    #[must_use]
    pub fn has_score(&self) -> bool {
        self.repairability_score.is_some()
    }

    /// The score as an integer, when it is integral and within 0-10.
    ///
    /// Anything else (absent, fractional, out of range) is not a valid
    /// rating and is excluded from the histogram and structured metadata.
    #[must_use]
    pub fn integral_score(&self) -> Option<u8> {
        let score = self.repairability_score?;
        if score.fract() == 0.0 && (0.0..=10.0).contains(&score) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Some(score as u8)
        } else {
            None
        }
    }

    /// Number of linked teardown guides.
    #[must_use]
    pub fn teardown_count(&self) -> usize {
        self.teardown_urls.len()
    }
}

/// A third-party repair guide linked to a device.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Teardown {
    pub title: String,
    pub url: String,

    /// Free-text difficulty label ("Moderate", "Difficult", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,

    /// Classification tags
    #[serde(default)]
    pub tags: Vec<TeardownTag>,
}

impl Teardown {
    /// Whether this guide carries the archived tag.
    #[must_use]
    pub fn is_archived(&self) -> bool {
        self.tags.contains(&TeardownTag::Archived)
    }
}

/// Guide classification tag.
///
/// The generator emits lowercase snake_case tag strings. Tags outside the
/// known vocabulary are preserved verbatim so they survive a round-trip,
/// and sort after the known ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TeardownTag {
    Starred,
    UserContributed,
    Archived,
    Other(String),
}

impl TeardownTag {
    /// Fixed badge ordering: starred < user_contributed < archived < unknown.
    #[must_use]
    pub fn priority(&self) -> u8 {
        match self {
            Self::Starred => 0,
            Self::UserContributed => 1,
            Self::Archived => 2,
            Self::Other(_) => 3,
        }
    }

    /// The wire representation of the tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Starred => "starred",
            Self::UserContributed => "user_contributed",
            Self::Archived => "archived",
            Self::Other(s) => s,
        }
    }

    /// Short label for compact badge display.
    #[must_use]
    pub fn badge(&self) -> &str {
        match self {
            Self::Starred => "★",
            Self::UserContributed => "user",
            Self::Archived => "archived",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for TeardownTag {
    fn from(s: &str) -> Self {
        match s {
            "starred" => Self::Starred,
            "user_contributed" => Self::UserContributed,
            "archived" => Self::Archived,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TeardownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TeardownTag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TeardownTag {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// Composite device identity used by the selection tracker.
///
/// Case-insensitive on both components so that cosmetic casing changes in
/// the upstream dataset do not silently drop selections across refreshes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceKey {
    name: String,
    brand: String,
}

impl DeviceKey {
    #[must_use]
    pub fn new(name: &str, brand: Option<&str>) -> Self {
        Self {
            name: name.to_lowercase(),
            brand: brand.unwrap_or_default().to_lowercase(),
        }
    }
}

impl fmt::Display for DeviceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.brand.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{} {}", self.brand, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(name: &str, score: Option<f64>) -> Device {
        Device {
            name: name.to_string(),
            title: None,
            repairability_score: score,
            scorecard_version: None,
            brand: None,
            link: None,
            teardown_urls: Vec::new(),
        }
    }

    #[test]
    fn test_integral_score_bounds() {
        assert_eq!(device("a", Some(7.0)).integral_score(), Some(7));
        assert_eq!(device("a", Some(0.0)).integral_score(), Some(0));
        assert_eq!(device("a", Some(10.0)).integral_score(), Some(10));
        assert_eq!(device("a", Some(7.5)).integral_score(), None);
        assert_eq!(device("a", Some(11.0)).integral_score(), None);
        assert_eq!(device("a", Some(-1.0)).integral_score(), None);
        assert_eq!(device("a", None).integral_score(), None);
    }

    #[test]
    fn test_tag_round_trip() {
        let tags: Vec<TeardownTag> =
            serde_json::from_str(r#"["starred","archived","in_progress"]"#).unwrap();
        assert_eq!(
            tags,
            vec![
                TeardownTag::Starred,
                TeardownTag::Archived,
                TeardownTag::Other("in_progress".to_string()),
            ]
        );
        let back = serde_json::to_string(&tags).unwrap();
        assert_eq!(back, r#"["starred","archived","in_progress"]"#);
    }

    #[test]
    fn test_device_key_case_folds() {
        let a = DeviceKey::new("Pixel 9", Some("Google"));
        let b = DeviceKey::new("pixel 9", Some("GOOGLE"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_device_deserializes_sparse_entry() {
        let d: Device = serde_json::from_str(
            r#"{"name":"Fairphone 5","repairability_score":10,"teardown_urls":[]}"#,
        )
        .unwrap();
        assert_eq!(d.integral_score(), Some(10));
        assert!(d.brand.is_none());
    }
}
