//! Filter and sort state.

use std::fmt;

/// Device-list filter criteria. All criteria are conjunctive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Case-insensitive substring match against the device name
    pub search: String,
    /// Exact brand match; `None` means any brand
    pub brand: Option<String>,
    /// Exact score match, 0-10; `None` means any score
    pub score: Option<u8>,
    /// When false, devices without a score are excluded regardless of
    /// the score filter
    pub include_unscored: bool,
}

impl FilterState {
    /// Whether every criterion is at its default.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Human-readable chips for the active criteria.
    #[must_use]
    pub fn chips(&self) -> Vec<String> {
        let mut chips = Vec::new();
        if !self.search.is_empty() {
            chips.push(format!("name~\"{}\"", self.search));
        }
        if let Some(brand) = &self.brand {
            chips.push(format!("brand={brand}"));
        }
        if let Some(score) = self.score {
            chips.push(format!("score={score}"));
        }
        if self.include_unscored {
            chips.push("unscored shown".to_string());
        }
        chips
    }
}

/// Sortable columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Brand,
    Score,
    TeardownCount,
}

impl SortKey {
    /// Wire name used in the share string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Brand => "brand",
            Self::Score => "repairability_score",
            Self::TeardownCount => "teardown-count",
        }
    }

    /// Parse a wire name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(Self::Name),
            "brand" => Some(Self::Brand),
            "repairability_score" => Some(Self::Score),
            "teardown-count" => Some(Self::TeardownCount),
            _ => None,
        }
    }

    /// Column header label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Device",
            Self::Brand => "Brand",
            Self::Score => "Score",
            Self::TeardownCount => "Guides",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    /// Arrow glyph for the active column header.
    #[must_use]
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single active (key, direction) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    /// Apply a sort request: re-selecting the active key flips direction,
    /// a new key resets to ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = SortDirection::Asc;
        }
    }
}

/// Combined filter + sort state, the unit the share string round-trips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub filter: FilterState,
    pub sort: SortState,
}
