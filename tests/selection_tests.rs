//! Selection tracker integration tests.

use fixgrade::model::{Device, DeviceKey};
use fixgrade::view::{SelectionSet, Toggle, MAX_COMPARE};

fn device(name: &str, brand: &str) -> Device {
    Device {
        name: name.to_string(),
        title: None,
        repairability_score: Some(5.0),
        scorecard_version: None,
        brand: Some(brand.to_string()),
        link: None,
        teardown_urls: Vec::new(),
    }
}

#[test]
fn sixth_distinct_id_is_rejected() {
    let mut selection = SelectionSet::new();
    for i in 0..5 {
        assert_eq!(
            selection.toggle(DeviceKey::new(&format!("device {i}"), Some("acme"))),
            Toggle::Added
        );
    }
    assert_eq!(selection.len(), MAX_COMPARE);

    let result = selection.toggle(DeviceKey::new("device 5", Some("acme")));
    assert_eq!(result, Toggle::Rejected);
    assert_eq!(selection.len(), MAX_COMPARE);
}

#[test]
fn identity_is_name_plus_brand() {
    let mut selection = SelectionSet::new();
    selection.toggle(device("One", "Acme").key());

    // Same name under a different brand is a different device
    assert_eq!(selection.toggle(device("One", "Bmce").key()), Toggle::Added);
    assert_eq!(selection.len(), 2);

    // Same name+brand with different casing is the same device
    assert_eq!(
        selection.toggle(DeviceKey::new("ONE", Some("ACME"))),
        Toggle::Removed
    );
    assert_eq!(selection.len(), 1);
}

#[test]
fn comparison_resolves_against_the_full_dataset() {
    let dataset = vec![
        device("visible", "Acme"),
        device("hidden by filter", "Acme"),
    ];

    let mut selection = SelectionSet::new();
    selection.toggle(dataset[0].key());
    selection.toggle(dataset[1].key());

    // Resolution does not depend on any filtered view
    let resolved = selection.resolve(&dataset);
    assert_eq!(resolved.len(), 2);
    assert!(selection.can_compare(&dataset));

    // One device disappears from the dataset entirely: comparison
    // degrades gracefully below the 2-device minimum
    let shrunk = vec![dataset[0].clone()];
    assert_eq!(selection.resolve(&shrunk).len(), 1);
    assert!(!selection.can_compare(&shrunk));
}

#[test]
fn clear_always_empties() {
    let mut selection = SelectionSet::new();
    for i in 0..MAX_COMPARE {
        selection.toggle(DeviceKey::new(&format!("d{i}"), None));
    }
    selection.clear();
    assert!(selection.is_empty());
    assert_eq!(
        selection.toggle(DeviceKey::new("d0", None)),
        Toggle::Added
    );
}
