//! Filter/sort engine tests.
//!
//! Scenario coverage for the derivation pipeline plus property-based
//! checks of the two engine invariants: filtering is idempotent and
//! sorting is stable for every key.

use fixgrade::model::{Device, Teardown};
use fixgrade::view::{derive_view, FilterState, SortDirection, SortKey, SortState};
use proptest::prelude::*;

// ============================================================================
// Fixtures
// ============================================================================

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

fn with_teardowns(mut d: Device, count: usize) -> Device {
    d.teardown_urls = (0..count)
        .map(|i| Teardown {
            title: format!("guide {i}"),
            url: format!("https://guides.example.org/{i}"),
            difficulty: None,
            tags: Vec::new(),
        })
        .collect();
    d
}

fn spec_dataset() -> Vec<Device> {
    vec![
        device("A", Some("X"), Some(9.0)),
        device("B", Some("Y"), Some(3.0)),
        device("C", Some("X"), None),
    ]
}

fn view_names(records: &[Device], filter: &FilterState, sort: &SortState) -> Vec<String> {
    derive_view(records, filter, sort)
        .into_iter()
        .map(|i| records[i].name.clone())
        .collect()
}

// ============================================================================
// Scenario tests
// ============================================================================

#[test]
fn brand_filter_with_unscored_excluded() {
    let records = spec_dataset();
    let filter = FilterState {
        brand: Some("X".to_string()),
        include_unscored: false,
        ..Default::default()
    };
    // C excluded for missing score, B excluded for brand
    assert_eq!(
        view_names(&records, &filter, &SortState::default()),
        vec!["A"]
    );
}

#[test]
fn score_ascending_with_unscored_included() {
    let records = spec_dataset();
    let filter = FilterState {
        include_unscored: true,
        ..Default::default()
    };
    let sort = SortState {
        key: SortKey::Score,
        direction: SortDirection::Asc,
    };
    // Absent sorts before every present score
    assert_eq!(view_names(&records, &filter, &sort), vec!["C", "B", "A"]);
}

#[test]
fn teardown_count_sort() {
    let records = vec![
        with_teardowns(device("many", None, Some(5.0)), 4),
        device("none", None, Some(5.0)),
        with_teardowns(device("one", None, Some(5.0)), 1),
    ];
    let sort = SortState {
        key: SortKey::TeardownCount,
        direction: SortDirection::Desc,
    };
    assert_eq!(
        view_names(&records, &FilterState::default(), &sort),
        vec!["many", "one", "none"]
    );
}

#[test]
fn all_filters_are_conjunctive() {
    let records = vec![
        device("Pixel 9", Some("Google"), Some(7.0)),
        device("Pixel 8", Some("Google"), Some(6.0)),
        device("Pixel Tablet", Some("Googol"), Some(7.0)),
    ];
    let filter = FilterState {
        search: "pixel".to_string(),
        brand: Some("Google".to_string()),
        score: Some(7),
        include_unscored: false,
    };
    assert_eq!(
        view_names(&records, &filter, &SortState::default()),
        vec!["Pixel 9"]
    );
}

#[test]
fn empty_view_is_valid() {
    let records = spec_dataset();
    let filter = FilterState {
        search: "zzz".to_string(),
        ..Default::default()
    };
    assert!(view_names(&records, &filter, &SortState::default()).is_empty());
}

// ============================================================================
// Properties
// ============================================================================

fn arb_device() -> impl Strategy<Value = Device> {
    (
        "[a-zA-Z0-9 ]{0,12}",
        prop_oneof![Just(None), "[A-Z][a-z]{0,6}".prop_map(Some)],
        prop_oneof![
            Just(None),
            (0u8..=10).prop_map(|s| Some(f64::from(s))),
            Just(Some(7.5)),
        ],
        0usize..4,
    )
        .prop_map(|(name, brand, score, teardowns)| {
            with_teardowns(device(&name, brand.as_deref(), score), teardowns)
        })
}

fn arb_filter() -> impl Strategy<Value = FilterState> {
    (
        "[a-z]{0,3}",
        prop_oneof![Just(None), "[A-Z][a-z]{0,6}".prop_map(Some)],
        proptest::option::of(0u8..=10),
        any::<bool>(),
    )
        .prop_map(|(search, brand, score, include_unscored)| FilterState {
            search,
            brand,
            score,
            include_unscored,
        })
}

fn arb_sort() -> impl Strategy<Value = SortState> {
    (
        prop_oneof![
            Just(SortKey::Name),
            Just(SortKey::Brand),
            Just(SortKey::Score),
            Just(SortKey::TeardownCount),
        ],
        prop_oneof![Just(SortDirection::Asc), Just(SortDirection::Desc)],
    )
        .prop_map(|(key, direction)| SortState { key, direction })
}

proptest! {
    /// Filtering an already-filtered set with the same state is a no-op.
    #[test]
    fn filter_is_idempotent(
        records in proptest::collection::vec(arb_device(), 0..24),
        filter in arb_filter(),
    ) {
        let sort = SortState::default();
        let once: Vec<Device> = derive_view(&records, &filter, &sort)
            .into_iter()
            .map(|i| records[i].clone())
            .collect();
        let twice = derive_view(&once, &filter, &sort);
        prop_assert_eq!(twice, (0..once.len()).collect::<Vec<_>>());
    }

    /// Records with equal comparison keys keep their input order.
    #[test]
    fn sort_is_stable(
        records in proptest::collection::vec(arb_device(), 0..24),
        sort in arb_sort(),
    ) {
        let filter = FilterState { include_unscored: true, ..Default::default() };
        let view = derive_view(&records, &filter, &sort);

        let key_of = |d: &Device| -> String {
            match sort.key {
                SortKey::Name => d.name.to_lowercase(),
                SortKey::Brand => d.brand.clone().unwrap_or_default().to_lowercase(),
                SortKey::Score => format!("{:?}", d.repairability_score),
                SortKey::TeardownCount => d.teardown_urls.len().to_string(),
            }
        };

        for pair in view.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if key_of(&records[a]) == key_of(&records[b]) {
                prop_assert!(a < b, "equal-key records reordered: {a} after {b}");
            }
        }
    }

    /// The view never invents or duplicates records.
    #[test]
    fn view_is_a_subset_of_indices(
        records in proptest::collection::vec(arb_device(), 0..24),
        filter in arb_filter(),
        sort in arb_sort(),
    ) {
        let view = derive_view(&records, &filter, &sort);
        let mut seen = std::collections::HashSet::new();
        for &idx in &view {
            prop_assert!(idx < records.len());
            prop_assert!(seen.insert(idx), "duplicate index {idx}");
        }
    }
}
