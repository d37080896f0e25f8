use serde::{Deserialize, Serialize};

use crate::enums::SortOption;

/// Текущий выбор фильтров списка каталога
///
/// Заменяется целиком при каждом изменении.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFilters {
    /// Категория; пустая строка означает "без фильтра"
    pub category: String,
    pub sort_by: SortOption,
}

impl CatalogFilters {
    pub fn new(category: impl Into<String>, sort_by: SortOption) -> Self {
        Self {
            category: category.into(),
            sort_by,
        }
    }

    pub fn with_category(&self, category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            sort_by: self.sort_by,
        }
    }

    pub fn with_sort_by(&self, sort_by: SortOption) -> Self {
        Self {
            category: self.category.clone(),
            sort_by,
        }
    }

    /// Фильтр активен, если выбрана категория или сортировка
    pub fn is_active(&self) -> bool {
        !self.category.is_empty() || self.sort_by.is_selected()
    }
}
