//! Score histogram buckets.

use crate::model::Device;

/// Number of histogram buckets: one per score 0-10 inclusive.
pub const SCORE_BUCKETS: usize = 11;

/// Count devices per integral score.
///
/// Only integer scores in [0, 10] are counted, so the bucket sum is at
/// most the record count, with equality exactly when every record carries
/// a valid integral score.
#[must_use]
pub fn score_buckets<'a>(records: impl IntoIterator<Item = &'a Device>) -> [u64; SCORE_BUCKETS] {
    let mut buckets = [0u64; SCORE_BUCKETS];
    for device in records {
        if let Some(score) = device.integral_score() {
            buckets[usize::from(score)] += 1;
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(score: Option<f64>) -> Device {
        Device {
            name: "d".to_string(),
            title: None,
            repairability_score: score,
            scorecard_version: None,
            brand: None,
            link: None,
            teardown_urls: Vec::new(),
        }
    }

    #[test]
    fn test_bucket_count_and_sum() {
        let records = vec![
            device(Some(0.0)),
            device(Some(10.0)),
            device(Some(10.0)),
            device(Some(7.5)),  // not integral, not counted
            device(Some(11.0)), // out of range, not counted
            device(None),       // unscored, not counted
        ];
        let buckets = score_buckets(&records);
        assert_eq!(buckets.len(), SCORE_BUCKETS);
        assert_eq!(buckets[0], 1);
        assert_eq!(buckets[10], 2);
        let sum: u64 = buckets.iter().sum();
        assert_eq!(sum, 3);
        assert!(sum <= records.len() as u64);
    }

    #[test]
    fn test_sum_equals_len_when_all_valid() {
        let records: Vec<_> = (0..=10).map(|s| device(Some(f64::from(s)))).collect();
        let buckets = score_buckets(&records);
        assert_eq!(buckets.iter().sum::<u64>(), records.len() as u64);
        assert!(buckets.iter().all(|&b| b == 1));
    }
}
