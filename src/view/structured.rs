//! Structured item-list metadata.
//!
//! A machine-readable description of the current view for external
//! indexers, in schema.org `ItemList` shape. Regenerated on every render
//! pass so it always mirrors what the table shows.

use crate::config::DEFAULT_STRUCTURED_LIMIT;
use crate::model::Device;
use serde_json::{json, Value};

/// Build the item-list document from the first entries of the derived
/// view. Each element carries its 1-based position, link, name and brand;
/// a normalized rating block is attached only when the score is a finite
/// number.
#[must_use]
pub fn item_list(view: &[&Device]) -> Value {
    let elements: Vec<Value> = view
        .iter()
        .take(DEFAULT_STRUCTURED_LIMIT)
        .enumerate()
        .map(|(i, device)| element(i + 1, device))
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "numberOfItems": elements.len(),
        "itemListElement": elements,
    })
}

fn element(position: usize, device: &Device) -> Value {
    let mut item = json!({
        "@type": "Product",
        "name": device.name,
    });

    if let Some(brand) = &device.brand {
        item["brand"] = json!({ "@type": "Brand", "name": brand });
    }
    if let Some(link) = &device.link {
        item["url"] = json!(link);
    }
    if let Some(score) = device.repairability_score.filter(|s| s.is_finite()) {
        item["aggregateRating"] = json!({
            "@type": "AggregateRating",
            "ratingValue": score,
            "bestRating": 10,
            "worstRating": 0,
            "ratingCount": 1,
        });
    }

    json!({
        "@type": "ListItem",
        "position": position,
        "item": item,
    })
}
