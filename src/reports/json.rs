//! JSON report generator.

use crate::error::Result;
use crate::model::Device;

/// Render the view as a pretty-printed JSON array of full device records,
/// in view order.
pub fn json_report(view: &[&Device]) -> Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_report_preserves_view_order() {
        let a = Device {
            name: "B-device".to_string(),
            title: None,
            repairability_score: Some(4.0),
            scorecard_version: None,
            brand: None,
            link: None,
            teardown_urls: Vec::new(),
        };
        let b = Device {
            name: "A-device".to_string(),
            ..a.clone()
        };
        let view: Vec<&Device> = vec![&a, &b];

        let out = json_report(&view).unwrap();
        let parsed: Vec<Device> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0].name, "B-device");
        assert_eq!(parsed[1].name, "A-device");
    }
}
