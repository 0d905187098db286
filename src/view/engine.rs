//! The filter/sort engine.
//!
//! Pure functions from `(dataset, state)` to an ordered view, expressed as
//! indices into the dataset so callers never hold self-referential
//! borrows. The derived view is recomputed wholesale on every state
//! change and must always equal `sort(filter(dataset))`; nothing patches
//! it incrementally.

use super::state::{FilterState, SortDirection, SortKey, SortState};
use crate::model::Device;
use std::cmp::Ordering;

/// Derive the ordered, filtered view of the dataset.
#[must_use]
pub fn derive_view(records: &[Device], filter: &FilterState, sort: &SortState) -> Vec<usize> {
    sort_indices(records, filter_indices(records, filter), sort)
}

/// Indices of records passing every filter criterion.
fn filter_indices(records: &[Device], state: &FilterState) -> Vec<usize> {
    let needle = state.search.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, d)| matches(d, state, &needle))
        .map(|(i, _)| i)
        .collect()
}

fn matches(device: &Device, state: &FilterState, needle: &str) -> bool {
    if !needle.is_empty() && !device.name.to_lowercase().contains(needle) {
        return false;
    }
    if let Some(brand) = &state.brand {
        if device.brand.as_deref() != Some(brand.as_str()) {
            return false;
        }
    }
    if !state.include_unscored && !device.has_score() {
        return false;
    }
    if let Some(score) = state.score {
        if device.repairability_score != Some(f64::from(score)) {
            return false;
        }
    }
    true
}

/// Order the filtered indices. Stable: ties keep their input order, in
/// either direction — descending reverses the comparison, not the input.
fn sort_indices(records: &[Device], mut view: Vec<usize>, sort: &SortState) -> Vec<usize> {
    view.sort_by(|&a, &b| {
        let ord = compare(&records[a], &records[b], sort.key);
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    view
}

fn compare(a: &Device, b: &Device, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Brand => brand_key(a).cmp(&brand_key(b)),
        // Absent scores sort below every present score
        SortKey::Score => score_key(a).total_cmp(&score_key(b)),
        SortKey::TeardownCount => a.teardown_count().cmp(&b.teardown_count()),
    }
}

fn brand_key(d: &Device) -> String {
    d.brand.as_deref().unwrap_or_default().to_lowercase()
}

fn score_key(d: &Device) -> f64 {
    d.repairability_score.unwrap_or(-1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(name: &str, brand: Option<&str>, score: Option<f64>) -> Device {
        Device {
            name: name.to_string(),
            title: None,
            repairability_score: score,
            scorecard_version: None,
            brand: brand.map(str::to_string),
            link: None,
            teardown_urls: Vec::new(),
        }
    }

    fn dataset() -> Vec<Device> {
        vec![
            device("A", Some("X"), Some(9.0)),
            device("B", Some("Y"), Some(3.0)),
            device("C", Some("X"), None),
        ]
    }

    #[test]
    fn test_brand_filter_excludes_unscored_by_default() {
        let records = dataset();
        let filter = FilterState {
            brand: Some("X".to_string()),
            ..Default::default()
        };
        let view = derive_view(&records, &filter, &SortState::default());
        // C excluded for missing score, B excluded for brand
        assert_eq!(view, vec![0]);
    }

    #[test]
    fn test_absent_score_sorts_before_present() {
        let records = dataset();
        let filter = FilterState {
            include_unscored: true,
            ..Default::default()
        };
        let sort = SortState {
            key: SortKey::Score,
            direction: SortDirection::Asc,
        };
        let view = derive_view(&records, &filter, &sort);
        let names: Vec<_> = view.iter().map(|&i| records[i].name.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let records = vec![
            device("Pixel 9 Pro", Some("Google"), Some(8.0)),
            device("Galaxy S25", Some("Samsung"), Some(6.0)),
        ];
        let filter = FilterState {
            search: "pIxEl".to_string(),
            ..Default::default()
        };
        let view = derive_view(&records, &filter, &SortState::default());
        assert_eq!(view, vec![0]);
    }

    #[test]
    fn test_score_filter_exact_match() {
        let records = dataset();
        let filter = FilterState {
            score: Some(3),
            ..Default::default()
        };
        let view = derive_view(&records, &filter, &SortState::default());
        assert_eq!(view, vec![1]);
    }

    #[test]
    fn test_empty_result_is_first_class() {
        let records = dataset();
        let filter = FilterState {
            search: "nothing matches this".to_string(),
            ..Default::default()
        };
        let view = derive_view(&records, &filter, &SortState::default());
        assert!(view.is_empty());
    }

    #[test]
    fn test_descending_keeps_tie_order() {
        let records = vec![
            device("first", Some("Acme"), Some(5.0)),
            device("second", Some("Acme"), Some(5.0)),
            device("third", Some("Acme"), Some(7.0)),
        ];
        let filter = FilterState::default();
        let sort = SortState {
            key: SortKey::Score,
            direction: SortDirection::Desc,
        };
        let view = derive_view(&records, &filter, &sort);
        let names: Vec<_> = view.iter().map(|&i| records[i].name.as_str()).collect();
        // 7 first, then the two fives in input order
        assert_eq!(names, vec!["third", "first", "second"]);
    }
}
