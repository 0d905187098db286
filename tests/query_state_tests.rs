//! Share-string round-trip tests.

use fixgrade::view::{from_query, to_query, FilterState, SortDirection, SortKey, SortState};
use proptest::prelude::*;

#[test]
fn spec_round_trip() {
    let filter = FilterState {
        search: "pixel".to_string(),
        brand: Some("Google".to_string()),
        score: Some(7),
        include_unscored: true,
    };
    let sort = SortState {
        key: SortKey::Score,
        direction: SortDirection::Desc,
    };

    let query = to_query(&filter, &sort);
    let restored = from_query(&query).unwrap();

    assert_eq!(restored.filter, filter);
    assert_eq!(restored.sort, sort);
}

#[test]
fn defaults_are_omitted() {
    let query = to_query(&FilterState::default(), &SortState::default());
    assert_eq!(query, "");

    // Sorting by name ascending is the default and must not appear
    let sort = SortState {
        key: SortKey::Name,
        direction: SortDirection::Asc,
    };
    assert_eq!(to_query(&FilterState::default(), &sort), "");

    // Flipping direction makes it non-default
    let sort = SortState {
        key: SortKey::Name,
        direction: SortDirection::Desc,
    };
    assert_eq!(to_query(&FilterState::default(), &sort), "sort=name:desc");
}

#[test]
fn absent_parameters_mean_default_state() {
    let state = from_query("").unwrap();
    assert_eq!(state.filter, FilterState::default());
    assert_eq!(state.sort, SortState::default());
    assert!(!state.filter.include_unscored);
}

#[test]
fn selection_is_not_part_of_the_share_string() {
    // Nothing selection-related serializes; the grammar is fixed
    let filter = FilterState {
        search: "a".to_string(),
        ..Default::default()
    };
    let query = to_query(&filter, &SortState::default());
    assert_eq!(query, "q=a");
}

proptest! {
    /// Any state round-trips through its share string.
    #[test]
    fn arbitrary_state_round_trips(
        search in "[a-zA-Z0-9 &=%+]{0,16}",
        brand in proptest::option::of("[a-zA-Z0-9 ]{1,12}"),
        score in proptest::option::of(0u8..=10),
        include_unscored in any::<bool>(),
        key in prop_oneof![
            Just(SortKey::Name),
            Just(SortKey::Brand),
            Just(SortKey::Score),
            Just(SortKey::TeardownCount),
        ],
        direction in prop_oneof![Just(SortDirection::Asc), Just(SortDirection::Desc)],
    ) {
        let filter = FilterState { search, brand, score, include_unscored };
        let sort = SortState { key, direction };

        let restored = from_query(&to_query(&filter, &sort)).unwrap();
        prop_assert_eq!(restored.filter, filter);
        prop_assert_eq!(restored.sort, sort);
    }
}
