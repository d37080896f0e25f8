use contracts::domain::a001_catalog_item::CatalogFilters;
use contracts::enums::SortOption;
use leptos::prelude::*;

/// Фильтры списка каталога, один экземпляр на сессию
///
/// Каждое изменение заменяет значение целиком.
#[derive(Clone, Copy)]
pub struct FilterStateStore {
    filters: RwSignal<CatalogFilters>,
}

impl FilterStateStore {
    pub fn new() -> Self {
        Self {
            filters: RwSignal::new(CatalogFilters::default()),
        }
    }

    /// Реактивное чтение (подписка)
    pub fn get(&self) -> CatalogFilters {
        self.filters.get()
    }

    pub fn get_untracked(&self) -> CatalogFilters {
        self.filters.get_untracked()
    }

    pub fn set(&self, filters: CatalogFilters) {
        log::debug!("filters: {:?}", filters);
        self.filters.set(filters);
    }

    pub fn set_category(&self, category: String) {
        self.set(self.get_untracked().with_category(category));
    }

    pub fn set_sort_by(&self, sort_by: SortOption) {
        self.set(self.get_untracked().with_sort_by(sort_by));
    }

    pub fn reset(&self) {
        self.set(CatalogFilters::default());
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.with(CatalogFilters::is_active)
    }
}

impl Default for FilterStateStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_filter_state() -> FilterStateStore {
    use_context::<FilterStateStore>().expect("FilterStateStore not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_updates_keep_the_other_field() {
        let store = FilterStateStore::new();
        store.set_category("Electronics".into());
        store.set_sort_by(SortOption::ScoreAsc);
        assert_eq!(
            store.get_untracked(),
            CatalogFilters::new("Electronics", SortOption::ScoreAsc)
        );

        store.set_category(String::new());
        assert_eq!(store.get_untracked().sort_by, SortOption::ScoreAsc);
    }

    #[test]
    fn test_reset_clears_everything() {
        let store = FilterStateStore::new();
        store.set(CatalogFilters::new("Lighting", SortOption::ScoreDesc));
        store.reset();
        assert_eq!(store.get_untracked(), CatalogFilters::default());
    }
}
