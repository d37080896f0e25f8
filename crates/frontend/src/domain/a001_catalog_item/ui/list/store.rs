use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::a001_catalog_item::{CatalogError, CatalogFilters, CatalogItem};

use crate::domain::a001_catalog_item::api;
use crate::domain::a001_catalog_item::pipeline::{
    reconcile_category, CatalogListPipeline, CatalogListState, Transition,
};
use crate::shared::state::filter_state::{use_filter_state, FilterStateStore};
use crate::shared::state::search_state::use_search_state;

/// Состояние одного списка каталога (страница списка или админка)
///
/// Связывает [`CatalogListPipeline`] с сетью и таймерами. Подписан на
/// поиск и фильтры сессии; живёт, пока жив владеющий компонент.
#[derive(Clone, Copy)]
pub struct CatalogListStore {
    pipeline: StoredValue<CatalogListPipeline>,
    state: RwSignal<CatalogListState>,
    categories: RwSignal<Vec<String>>,
    filters: FilterStateStore,
}

impl CatalogListStore {
    /// Создать список, подписать его на поиск/фильтры и начать загрузку
    pub fn attach() -> Self {
        let search = use_search_state();
        let filters = use_filter_state();

        let store = Self::new(search.get_untracked(), filters);

        Effect::new(move |_| {
            let query = search.get();
            let changed = store
                .pipeline
                .try_with_value(|p| p.query() != query)
                .unwrap_or(false);
            if changed {
                store.run(|p| p.set_query(query));
            }
        });

        Effect::new(move |_| {
            let current = filters.get();
            let changed = store
                .pipeline
                .try_with_value(|p| p.filters() != &current)
                .unwrap_or(false);
            if changed {
                store.run(|p| p.set_filters(current));
            }
        });

        store.refresh();
        store
    }

    fn new(query: String, filters: FilterStateStore) -> Self {
        Self {
            pipeline: StoredValue::new(CatalogListPipeline::new(query, filters.get_untracked())),
            state: RwSignal::new(CatalogListState::loading()),
            categories: RwSignal::new(Vec::new()),
            filters,
        }
    }

    pub fn state(&self) -> ReadSignal<CatalogListState> {
        self.state.read_only()
    }

    pub fn categories(&self) -> ReadSignal<Vec<String>> {
        self.categories.read_only()
    }

    /// Перезагрузить данные; поиск и фильтры применяются заново
    pub fn refresh(&self) {
        let Some(generation) = self.begin_load() else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            let result = api::fetch_all().await;
            this.complete_load(generation, result);
        });
    }

    fn begin_load(&self) -> Option<u64> {
        let (generation, transition) = self.pipeline.try_update_value(|p| p.start_load())?;
        self.apply(transition);
        Some(generation)
    }

    fn complete_load(&self, generation: u64, result: Result<Vec<CatalogItem>, CatalogError>) {
        let Some(transition) = self
            .pipeline
            .try_update_value(|p| p.finish_load(generation, result))
        else {
            return;
        };
        // более новая загрузка уже идёт
        if transition.emitted.is_empty() {
            return;
        }

        match self.sync_categories() {
            Some(filters) => {
                log::info!("Selected category is no longer available, resetting category filter");
                self.filters.set(filters.clone());
                self.run(|p| p.set_filters(filters));
            }
            None => self.apply(transition),
        }
    }

    /// Обновить список категорий; вернуть фильтры со сброшенной категорией,
    /// если выбранной больше нет
    fn sync_categories(&self) -> Option<CatalogFilters> {
        let (categories, reset) = self.pipeline.try_with_value(|p| {
            p.categories().map(|categories| {
                let reset = reconcile_category(p.filters(), &categories);
                (categories, reset)
            })
        })??;
        self.categories.set(categories);
        reset
    }

    fn run(&self, step: impl FnOnce(&mut CatalogListPipeline) -> Transition) {
        if let Some(transition) = self.pipeline.try_update_value(step) {
            self.apply(transition);
        }
    }

    fn apply(&self, transition: Transition) {
        for state in transition.emitted {
            if self.state.try_set(state).is_some() {
                return;
            }
        }

        if let Some(pending) = transition.pending {
            let this = *self;
            spawn_local(async move {
                TimeoutFuture::new(pending.delay_ms).await;
                this.run(|p| p.filter_elapsed(pending.generation));
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::a001_catalog_item::CatalogItemId;
    use contracts::enums::SortOption;

    fn item(id: &str, category: &str) -> CatalogItem {
        CatalogItem::new(
            CatalogItemId::new(id),
            format!("Item {}", id),
            "Plain description".into(),
            category.into(),
            Vec::new(),
            "test@example.com".into(),
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    fn items() -> Vec<CatalogItem> {
        vec![item("1", "Furniture"), item("2", "Lighting")]
    }

    #[test]
    fn test_superseded_load_is_dropped() {
        let filters = FilterStateStore::new();
        let store = CatalogListStore::new(String::new(), filters);

        let first = store.begin_load().unwrap();
        let second = store.begin_load().unwrap();

        store.complete_load(first, Ok(vec![item("9", "Garden")]));
        assert_eq!(store.state.get_untracked(), CatalogListState::loading());
        assert!(store.categories.get_untracked().is_empty());

        store.complete_load(second, Ok(items()));
        assert_eq!(store.state.get_untracked(), CatalogListState::loaded(items()));
        assert_eq!(
            store.categories.get_untracked(),
            vec!["Furniture".to_string(), "Lighting".to_string()]
        );
    }

    #[test]
    fn test_missing_category_is_reset_in_filter_store() {
        let filters = FilterStateStore::new();
        filters.set(CatalogFilters::new("Garden", SortOption::None));
        let store = CatalogListStore::new(String::new(), filters);

        let generation = store.begin_load().unwrap();
        store.complete_load(generation, Ok(items()));

        assert_eq!(filters.get_untracked(), CatalogFilters::default());
        assert!(!filters.has_active_filters());
        let state = store.state.get_untracked();
        assert!(!state.searching);
        assert_eq!(state.items, Some(items()));
    }

    #[test]
    fn test_available_category_is_kept() {
        let filters = FilterStateStore::new();
        let selected = CatalogFilters::new("Lighting", SortOption::None);
        filters.set(selected.clone());
        let store = CatalogListStore::new(String::new(), filters);

        let generation = store.begin_load().unwrap();
        store.complete_load(generation, Err(CatalogError::Fetch("offline".into())));

        assert_eq!(filters.get_untracked(), selected);
        assert!(store.state.get_untracked().error.is_some());
    }
}
