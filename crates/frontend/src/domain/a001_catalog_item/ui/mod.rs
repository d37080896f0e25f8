pub mod admin;
pub mod details;
pub mod edit;
pub mod filter_panel;
pub mod list;
pub mod score_badge;

use contracts::domain::a001_catalog_item::CatalogError;

/// Сообщение об ошибке загрузки одного элемента
pub fn load_error_message(error: &CatalogError) -> &'static str {
    match error {
        CatalogError::NotFound(_) => "Catalog item not found",
        _ => "Failed to load catalog item",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_message() {
        assert_eq!(
            load_error_message(&CatalogError::NotFound("9".into())),
            "Catalog item not found"
        );
        assert_eq!(
            load_error_message(&CatalogError::Fetch("HTTP 500".into())),
            "Failed to load catalog item"
        );
    }
}
