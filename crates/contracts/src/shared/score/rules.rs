use crate::domain::a001_catalog_item::CatalogItem;

pub const BASE_SCORE: i32 = 40;
pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

/// A named predicate over a catalog item and the points it adds
#[derive(Debug, Clone, Copy)]
pub struct ScoreRule {
    pub name: &'static str,
    pub points: i32,
    pub applies: fn(&CatalogItem) -> bool,
}

fn has_long_title(item: &CatalogItem) -> bool {
    item.title.chars().count() > 12
}

fn has_long_description(item: &CatalogItem) -> bool {
    item.description.chars().count() > 60
}

fn has_category(item: &CatalogItem) -> bool {
    !item.category.trim().is_empty()
}

fn has_tag(item: &CatalogItem) -> bool {
    !item.tags.is_empty()
}

fn has_two_tags(item: &CatalogItem) -> bool {
    item.tags.len() >= 2
}

/// Rules are evaluated in this order; the result does not depend on it.
pub static SCORE_RULES: [ScoreRule; 5] = [
    ScoreRule {
        name: "long_title",
        points: 20,
        applies: has_long_title,
    },
    ScoreRule {
        name: "long_description",
        points: 15,
        applies: has_long_description,
    },
    ScoreRule {
        name: "has_category",
        points: 10,
        applies: has_category,
    },
    ScoreRule {
        name: "has_tag",
        points: 10,
        applies: has_tag,
    },
    ScoreRule {
        name: "has_two_tags",
        points: 5,
        applies: has_two_tags,
    },
];

/// Compute the quality score of an item
pub fn compute_score(item: &CatalogItem) -> u8 {
    let bonus: i32 = SCORE_RULES
        .iter()
        .filter(|rule| (rule.applies)(item))
        .map(|rule| rule.points)
        .sum();

    // clamp keeps the u8 conversion lossless
    (BASE_SCORE + bonus).clamp(MIN_SCORE, MAX_SCORE) as u8
}

/// Score for an optional item; a missing item scores 0
pub fn score_of(item: Option<&CatalogItem>) -> u8 {
    item.map(compute_score).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_catalog_item::CatalogItemId;
    use chrono::{TimeZone, Utc};

    fn item(title: &str, description: &str, category: &str, tags: &[&str]) -> CatalogItem {
        CatalogItem::new(
            CatalogItemId::new("t"),
            title.to_string(),
            description.to_string(),
            category.to_string(),
            tags.iter().map(|t| t.to_string()).collect(),
            "tester@example.com".to_string(),
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_empty_item_scores_base() {
        assert_eq!(compute_score(&item("", "", "", &[])), 40);
    }

    #[test]
    fn test_title_threshold() {
        assert_eq!(compute_score(&item(&"a".repeat(12), "", "", &[])), 40);
        assert_eq!(compute_score(&item(&"a".repeat(13), "", "", &[])), 60);
    }

    #[test]
    fn test_title_length_counts_characters() {
        // 12 characters, 24 bytes
        assert_eq!(compute_score(&item(&"ж".repeat(12), "", "", &[])), 40);
    }

    #[test]
    fn test_description_threshold() {
        assert_eq!(compute_score(&item("", &"d".repeat(60), "", &[])), 40);
        assert_eq!(compute_score(&item("", &"d".repeat(61), "", &[])), 55);
    }

    #[test]
    fn test_category_must_be_non_blank() {
        assert_eq!(compute_score(&item("", "", "   ", &[])), 40);
        assert_eq!(compute_score(&item("", "", " Misc ", &[])), 50);
    }

    #[test]
    fn test_tag_rules_stack_and_cap() {
        assert_eq!(compute_score(&item("", "", "", &["a"])), 50);
        assert_eq!(compute_score(&item("", "", "", &["a", "b"])), 55);
        assert_eq!(compute_score(&item("", "", "", &["a", "b", "c", "d", "e"])), 55);
    }

    #[test]
    fn test_maximal_item_is_exactly_100() {
        let full = item(&"t".repeat(40), &"d".repeat(200), "Electronics", &["a", "b", "c"]);
        assert_eq!(compute_score(&full), 100);
    }

    #[test]
    fn test_score_always_in_range() {
        let titles = ["", "short", "a much longer title here"];
        let descriptions = ["", &"x".repeat(61)];
        let categories = ["", " ", "Misc"];
        let tag_sets: [&[&str]; 4] = [&[], &["a"], &["a", "b"], &["a", "b", "c", "d"]];

        for title in titles {
            for description in descriptions {
                for category in categories {
                    for tags in tag_sets {
                        let score = compute_score(&item(title, description, category, tags));
                        assert!((0..=100).contains(&score));
                    }
                }
            }
        }
    }

    #[test]
    fn test_score_of_missing_item() {
        assert_eq!(score_of(None), 0);
        assert_eq!(score_of(Some(&item("", "", "", &[]))), 40);
    }
}
