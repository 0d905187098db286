//! CSV report generator.

use super::escape::escape_csv;
use crate::model::Device;

/// Render the view as CSV with a fixed column set, suitable for
/// spreadsheet import. All string fields are quoted and double-quote
/// escaped; absent values are empty fields.
#[must_use]
pub fn csv_report(view: &[&Device]) -> String {
    let mut content = String::new();
    content.push_str("name,brand,repairability_score,link\n");

    for device in view {
        let score = device
            .repairability_score
            .map(format_score)
            .unwrap_or_default();
        content.push_str(&format!(
            "\"{}\",\"{}\",{},\"{}\"\n",
            escape_csv(&device.name),
            escape_csv(device.brand.as_deref().unwrap_or_default()),
            score,
            escape_csv(device.link.as_deref().unwrap_or_default()),
        ));
    }

    content
}

/// Integral scores print without a trailing `.0`.
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        score.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(name: &str, brand: Option<&str>, score: Option<f64>, link: Option<&str>) -> Device {
        Device {
            name: name.to_string(),
            title: None,
            repairability_score: score,
            scorecard_version: None,
            brand: brand.map(str::to_string),
            link: link.map(str::to_string),
            teardown_urls: Vec::new(),
        }
    }

    #[test]
    fn test_csv_columns_and_quoting() {
        let a = device(
            r#"Tab 12" Pro"#,
            Some("Acme"),
            Some(7.0),
            Some("https://example.org/tab"),
        );
        let b = device("Widget", None, None, None);
        let view: Vec<&Device> = vec![&a, &b];

        let csv = csv_report(&view);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("name,brand,repairability_score,link"));
        assert_eq!(
            lines.next(),
            Some(r#""Tab 12"" Pro","Acme",7,"https://example.org/tab""#)
        );
        assert_eq!(lines.next(), Some(r#""Widget","",,"""#));
        assert_eq!(lines.next(), None);
    }
}
