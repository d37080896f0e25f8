use std::sync::Arc;

use crate::domain::a001_catalog_item::CatalogRepository;

/// Состояние, общее для всех обработчиков
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogRepository>,
}

impl AppState {
    pub fn new(catalog: CatalogRepository) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
