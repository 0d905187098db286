//! Teardown list aggregation.

use crate::model::{Teardown, TeardownTag};

/// Order a device's teardowns for display: non-archived entries before
/// archived ones, stable within each group.
#[must_use]
pub fn ordered_teardowns(teardowns: &[Teardown]) -> Vec<&Teardown> {
    let mut view: Vec<&Teardown> = teardowns.iter().collect();
    view.sort_by_key(|t| u8::from(t.is_archived()));
    view
}

/// Deduplicated tag set across all of a device's teardowns, sorted by the
/// fixed badge priority (starred < user_contributed < archived < unknown).
#[must_use]
pub fn badge_tags(teardowns: &[Teardown]) -> Vec<TeardownTag> {
    let mut tags: Vec<TeardownTag> = Vec::new();
    for teardown in teardowns {
        for tag in &teardown.tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags.sort_by_key(|t| (t.priority(), t.as_str().to_string()));
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teardown(title: &str, tags: &[&str]) -> Teardown {
        Teardown {
            title: title.to_string(),
            url: format!("https://guides.example.org/{title}"),
            difficulty: None,
            tags: tags.iter().map(|&t| TeardownTag::from(t)).collect(),
        }
    }

    #[test]
    fn test_archived_sinks_to_the_bottom() {
        let teardowns = vec![teardown("T1", &["archived"]), teardown("T2", &[])];
        let ordered: Vec<_> = ordered_teardowns(&teardowns)
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(ordered, vec!["T2", "T1"]);
    }

    #[test]
    fn test_ordering_is_stable_within_groups() {
        let teardowns = vec![
            teardown("old-archived", &["archived"]),
            teardown("first", &[]),
            teardown("new-archived", &["archived"]),
            teardown("second", &["starred"]),
        ];
        let ordered: Vec<_> = ordered_teardowns(&teardowns)
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(ordered, vec!["first", "second", "old-archived", "new-archived"]);
    }

    #[test]
    fn test_badges_dedupe_and_priority_sort() {
        let teardowns = vec![
            teardown("a", &["archived", "mystery"]),
            teardown("b", &["user_contributed", "starred"]),
            teardown("c", &["starred"]),
        ];
        let badges: Vec<_> = badge_tags(&teardowns)
            .iter()
            .map(|t| t.as_str().to_string())
            .collect();
        assert_eq!(badges, vec!["starred", "user_contributed", "archived", "mystery"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(ordered_teardowns(&[]).is_empty());
        assert!(badge_tags(&[]).is_empty());
    }
}
