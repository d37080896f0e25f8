use chrono::{DateTime, Utc};
use contracts::domain::a001_catalog_item::{CatalogItem, CatalogItemId};

fn timestamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

fn item(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    tags: &[&str],
    creator: &str,
    created_at: &str,
    approved: bool,
) -> CatalogItem {
    let mut item = CatalogItem::new(
        CatalogItemId::new(id),
        title.into(),
        description.into(),
        category.into(),
        tags.iter().map(|t| t.to_string()).collect(),
        creator.into(),
        timestamp(created_at),
    );
    item.approved = approved;
    item
}

/// Начальное наполнение каталога
pub fn default_items() -> Vec<CatalogItem> {
    vec![
        item(
            "1",
            "Compact wooden chair",
            "A stylish compact wooden chair made of oak. Comfortable and modern design.",
            "Furniture",
            &["wood", "chair"],
            "alice@example.com",
            "2025-01-10T10:00:00.000Z",
            false,
        ),
        item(
            "7",
            "Compact wooden chair",
            "A stylish compact wooden chair made of oak. Comfortable and modern design.",
            "Furniture",
            &["wood", "chair"],
            "alice@example.com",
            "2025-01-10T10:00:00.000Z",
            false,
        ),
        item(
            "4",
            "Bad Item",
            "Short desc.",
            "Misc",
            &[],
            "test@example.com",
            "2025-03-15T12:00:00.000Z",
            false,
        ),
        item(
            "2",
            "Wireless noise-cancelling headphones with long battery life",
            "Over-ear headphones delivering excellent sound quality and ANC for commuters.",
            "Electronics",
            &["audio", "wireless", "ANC"],
            "bob@example.com",
            "2025-02-20T15:30:00.000Z",
            true,
        ),
        item(
            "3",
            "Minimalist Desk Lamp",
            "LED desk lamp with adjustable brightness and color temperature.",
            "Lighting",
            &["LED"],
            "carol@example.com",
            "2025-03-05T09:45:00.000Z",
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let items = default_items();
        let ids: HashSet<_> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_seed_covers_every_band_side() {
        let items = default_items();
        assert!(items.iter().any(|i| i.can_be_approved()));
        assert!(items.iter().any(|i| !i.can_be_approved()));
        assert_eq!(items[1].created_at.to_rfc3339(), "2025-01-10T10:00:00+00:00");
    }
}
