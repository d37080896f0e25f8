//! Состояние списка каталога: загрузка + поиск + фильтр + сортировка
//!
//! Машина состояний без таймеров и сети. Каждое входное событие
//! возвращает [`Transition`]: состояния для немедленной публикации и,
//! возможно, отложенную фильтрацию, которую вызывающий код должен
//! завершить через [`CatalogListPipeline::filter_elapsed`] после задержки.
//!
//! Устаревшие результаты отбрасываются по поколениям: у загрузки свой
//! счётчик, у композиции (поиск/фильтр) свой. Новая загрузка сбрасывает
//! и ожидающую фильтрацию.

use contracts::domain::a001_catalog_item::{CatalogError, CatalogFilters, CatalogItem};
use contracts::enums::SortOption;
use std::cmp::Reverse;

use crate::shared::list_utils::{filter_list, Searchable};

pub const SEARCH_DEBOUNCE_MS: u32 = 300;
pub const FILTER_DELAY_MS: u32 = 500;
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load catalog items";

/// Готовое к отображению состояние списка
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogListState {
    pub loading: bool,
    pub error: Option<String>,
    pub items: Option<Vec<CatalogItem>>,
    pub searching: bool,
}

impl CatalogListState {
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn loaded(items: Vec<CatalogItem>) -> Self {
        Self {
            items: Some(items),
            ..Self::default()
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }
}

/// Отложенная фильтрация, которую нужно завершить через `delay_ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingFilter {
    pub generation: u64,
    pub delay_ms: u32,
}

/// Результат обработки одного входного события
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transition {
    pub emitted: Vec<CatalogListState>,
    pub pending: Option<PendingFilter>,
}

impl Transition {
    fn emit(state: CatalogListState) -> Self {
        Self {
            emitted: vec![state],
            pending: None,
        }
    }
}

impl Searchable for CatalogItem {
    fn matches_filter(&self, filter: &str) -> bool {
        self.title.to_lowercase().contains(filter)
            || self.description.to_lowercase().contains(filter)
    }
}

#[derive(Debug, Clone)]
pub struct CatalogListPipeline {
    source: CatalogListState,
    query: String,
    filters: CatalogFilters,
    load_generation: u64,
    compose_generation: u64,
}

impl CatalogListPipeline {
    pub fn new(query: impl Into<String>, filters: CatalogFilters) -> Self {
        Self {
            source: CatalogListState::loading(),
            query: query.into(),
            filters,
            load_generation: 0,
            compose_generation: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filters(&self) -> &CatalogFilters {
        &self.filters
    }

    /// Начать (пере)загрузку; возвращает поколение загрузки для `finish_load`
    pub fn start_load(&mut self) -> (u64, Transition) {
        self.load_generation += 1;
        self.source = CatalogListState::loading();
        (self.load_generation, self.compose())
    }

    /// Результат загрузки; результат устаревшей загрузки игнорируется
    pub fn finish_load(
        &mut self,
        generation: u64,
        result: Result<Vec<CatalogItem>, CatalogError>,
    ) -> Transition {
        if generation != self.load_generation {
            log::debug!(
                "Discarding stale catalog load {} (current {})",
                generation,
                self.load_generation
            );
            return Transition::default();
        }

        self.source = match result {
            Ok(items) => CatalogListState::loaded(items),
            Err(e) => {
                log::error!("Catalog load failed: {}", e);
                CatalogListState::failed(LOAD_ERROR_MESSAGE)
            }
        };
        self.compose()
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> Transition {
        self.query = query.into();
        self.compose()
    }

    pub fn set_filters(&mut self, filters: CatalogFilters) -> Transition {
        self.filters = filters;
        self.compose()
    }

    /// Задержка фильтрации истекла
    pub fn filter_elapsed(&mut self, generation: u64) -> Transition {
        if generation != self.compose_generation {
            return Transition::default();
        }
        match &self.source.items {
            Some(items) => Transition::emit(CatalogListState {
                items: Some(filter_items(items, &self.query, &self.filters)),
                searching: false,
                ..self.source.clone()
            }),
            None => Transition::default(),
        }
    }

    /// Категории загруженного списка; `None`, пока данных нет
    pub fn categories(&self) -> Option<Vec<String>> {
        self.source.items.as_deref().map(available_categories)
    }

    fn compose(&mut self) -> Transition {
        self.compose_generation += 1;

        let items = match &self.source.items {
            Some(items) => items,
            None => {
                return Transition::emit(CatalogListState {
                    searching: false,
                    ..self.source.clone()
                })
            }
        };

        if !self.query.trim().is_empty() || self.filters.is_active() {
            return Transition {
                emitted: vec![CatalogListState {
                    searching: true,
                    ..self.source.clone()
                }],
                pending: Some(PendingFilter {
                    generation: self.compose_generation,
                    delay_ms: FILTER_DELAY_MS,
                }),
            };
        }

        Transition::emit(CatalogListState {
            items: Some(sort_by_score(items.clone(), self.filters.sort_by)),
            searching: false,
            ..self.source.clone()
        })
    }
}

/// Поиск -> категория -> сортировка
pub fn filter_items(items: &[CatalogItem], query: &str, filters: &CatalogFilters) -> Vec<CatalogItem> {
    let mut result = filter_list(items.to_vec(), query);
    if !filters.category.is_empty() {
        result.retain(|item| item.category == filters.category);
    }
    sort_by_score(result, filters.sort_by)
}

/// Стабильная сортировка по текущему (вычисляемому) баллу
pub fn sort_by_score(mut items: Vec<CatalogItem>, sort_by: SortOption) -> Vec<CatalogItem> {
    match sort_by {
        SortOption::None => {}
        SortOption::ScoreAsc => items.sort_by_key(|item| item.score()),
        SortOption::ScoreDesc => items.sort_by_key(|item| Reverse(item.score())),
    }
    items
}

/// Уникальные категории в порядке первого появления
pub fn available_categories(items: &[CatalogItem]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in items {
        if !categories.contains(&item.category) {
            categories.push(item.category.clone());
        }
    }
    categories
}

/// Сбросить категорию, если её больше нет среди доступных
pub fn reconcile_category(filters: &CatalogFilters, categories: &[String]) -> Option<CatalogFilters> {
    if filters.category.is_empty() || categories.contains(&filters.category) {
        None
    } else {
        Some(filters.with_category(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::a001_catalog_item::CatalogItemId;

    fn item(id: &str, title: &str, description: &str, category: &str, tags: &[&str]) -> CatalogItem {
        CatalogItem::new(
            CatalogItemId::new(id),
            title.into(),
            description.into(),
            category.into(),
            tags.iter().map(|t| t.to_string()).collect(),
            "test@example.com".into(),
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    /// Три элемента: наушники (100), дешёвые наушники (50), лампа (80)
    fn seeded() -> Vec<CatalogItem> {
        vec![
            item(
                "1",
                "Wireless Headphones Pro",
                "Over-ear headphones delivering excellent sound quality and ANC for commuters.",
                "Electronics",
                &["audio", "wireless"],
            ),
            item("2", "Headphones", "Cheap", "Electronics", &[]),
            item(
                "3",
                "Minimalist Desk Lamp",
                "LED desk lamp",
                "Lighting",
                &["LED"],
            ),
        ]
    }

    fn loaded_pipeline() -> CatalogListPipeline {
        let mut pipeline = CatalogListPipeline::new("", CatalogFilters::default());
        let (generation, _) = pipeline.start_load();
        pipeline.finish_load(generation, Ok(seeded()));
        pipeline
    }

    fn ids(state: &CatalogListState) -> Vec<&str> {
        state
            .items
            .as_ref()
            .map(|items| items.iter().map(|i| i.id.as_str()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_load_emits_loading_then_loaded() {
        let mut pipeline = CatalogListPipeline::new("", CatalogFilters::default());
        let (generation, started) = pipeline.start_load();
        assert_eq!(started.emitted, vec![CatalogListState::loading()]);
        assert_eq!(started.pending, None);

        let items = seeded();
        let finished = pipeline.finish_load(generation, Ok(items.clone()));
        assert_eq!(finished.emitted, vec![CatalogListState::loaded(items)]);
    }

    #[test]
    fn test_search_goes_through_searching_state() {
        let mut pipeline = loaded_pipeline();

        let transition = pipeline.set_query("Headphones");
        assert_eq!(transition.emitted.len(), 1);
        let searching = &transition.emitted[0];
        assert!(searching.searching);
        assert_eq!(ids(searching), vec!["1", "2", "3"]);

        let pending = transition.pending.unwrap();
        assert_eq!(pending.delay_ms, FILTER_DELAY_MS);

        let done = pipeline.filter_elapsed(pending.generation);
        assert_eq!(done.emitted.len(), 1);
        assert!(!done.emitted[0].searching);
        assert_eq!(ids(&done.emitted[0]), vec!["1", "2"]);
    }

    #[test]
    fn test_search_matches_description_case_insensitive() {
        let mut pipeline = loaded_pipeline();
        let pending = pipeline.set_query("  led DESK ").pending.unwrap();
        let done = pipeline.filter_elapsed(pending.generation);
        assert_eq!(ids(&done.emitted[0]), vec!["3"]);
    }

    #[test]
    fn test_category_and_sort_ascending() {
        let mut pipeline = loaded_pipeline();
        let filters = CatalogFilters::new("Electronics", SortOption::ScoreAsc);

        let transition = pipeline.set_filters(filters);
        assert!(transition.emitted[0].searching);

        let done = pipeline.filter_elapsed(transition.pending.unwrap().generation);
        let state = &done.emitted[0];
        assert_eq!(ids(state), vec!["2", "1"]);
        let scores: Vec<u8> = state.items.as_ref().unwrap().iter().map(|i| i.score()).collect();
        assert!(scores.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_sort_descending_is_delayed_and_stable() {
        let mut items = seeded();
        items.push(item("4", "Headphones", "Cheap", "Electronics", &[]));
        let mut pipeline = CatalogListPipeline::new("", CatalogFilters::default());
        let (generation, _) = pipeline.start_load();
        pipeline.finish_load(generation, Ok(items));

        let transition = pipeline.set_filters(CatalogFilters::new("", SortOption::ScoreDesc));
        let done = pipeline.filter_elapsed(transition.pending.unwrap().generation);
        assert_eq!(ids(&done.emitted[0]), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_cleared_query_emits_immediately() {
        let mut pipeline = loaded_pipeline();
        pipeline.set_query("lamp");

        let transition = pipeline.set_query("   ");
        assert_eq!(transition.pending, None);
        assert_eq!(transition.emitted.len(), 1);
        assert!(!transition.emitted[0].searching);
        assert_eq!(ids(&transition.emitted[0]), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_failed_load_emits_error_once() {
        let mut pipeline = CatalogListPipeline::new("", CatalogFilters::default());
        let (generation, _) = pipeline.start_load();

        let failed = pipeline.finish_load(generation, Err(CatalogError::Fetch("boom".into())));
        assert_eq!(
            failed.emitted,
            vec![CatalogListState {
                loading: false,
                error: Some(LOAD_ERROR_MESSAGE.to_string()),
                items: None,
                searching: false,
            }]
        );
        assert_eq!(failed.pending, None);

        // повторный (устаревший или дублирующий) результат ничего не публикует
        let again = pipeline.finish_load(generation + 1, Err(CatalogError::Fetch("boom".into())));
        assert!(again.emitted.is_empty());
    }

    #[test]
    fn test_query_while_loading_reemits_load_state() {
        let mut pipeline = CatalogListPipeline::new("", CatalogFilters::default());
        pipeline.start_load();

        let transition = pipeline.set_query("chair");
        assert_eq!(transition.emitted, vec![CatalogListState::loading()]);
        assert_eq!(transition.pending, None);
    }

    #[test]
    fn test_query_applied_after_load() {
        let mut pipeline = CatalogListPipeline::new("lamp", CatalogFilters::default());
        let (generation, _) = pipeline.start_load();

        let transition = pipeline.finish_load(generation, Ok(seeded()));
        assert!(transition.emitted[0].searching);
        let done = pipeline.filter_elapsed(transition.pending.unwrap().generation);
        assert_eq!(ids(&done.emitted[0]), vec!["3"]);
    }

    #[test]
    fn test_stale_filter_completion_is_discarded() {
        let mut pipeline = loaded_pipeline();
        let first = pipeline.set_query("lamp").pending.unwrap();
        let second = pipeline.set_query("headphones").pending.unwrap();

        assert!(pipeline.filter_elapsed(first.generation).emitted.is_empty());
        let done = pipeline.filter_elapsed(second.generation);
        assert_eq!(ids(&done.emitted[0]), vec!["1", "2"]);
    }

    #[test]
    fn test_reload_discards_pending_filter_and_old_fetch() {
        let mut pipeline = loaded_pipeline();
        let pending = pipeline.set_query("lamp").pending.unwrap();

        let (old_generation, _) = pipeline.start_load();
        let (new_generation, _) = pipeline.start_load();
        assert!(pipeline.filter_elapsed(pending.generation).emitted.is_empty());

        let stale = pipeline.finish_load(old_generation, Ok(Vec::new()));
        assert!(stale.emitted.is_empty());

        let fresh = pipeline.finish_load(new_generation, Ok(seeded()));
        let done = pipeline.filter_elapsed(fresh.pending.unwrap().generation);
        assert_eq!(ids(&done.emitted[0]), vec!["3"]);
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let pipeline = loaded_pipeline();
        assert_eq!(
            pipeline.categories(),
            Some(vec!["Electronics".to_string(), "Lighting".to_string()])
        );

        let loading = CatalogListPipeline::new("", CatalogFilters::default());
        assert_eq!(loading.categories(), None);
    }

    #[test]
    fn test_reconcile_category() {
        let categories = vec!["Electronics".to_string()];
        let keep = CatalogFilters::new("Electronics", SortOption::ScoreDesc);
        assert_eq!(reconcile_category(&keep, &categories), None);

        let gone = CatalogFilters::new("Furniture", SortOption::ScoreDesc);
        assert_eq!(
            reconcile_category(&gone, &categories),
            Some(CatalogFilters::new("", SortOption::ScoreDesc))
        );
        assert_eq!(reconcile_category(&CatalogFilters::default(), &[]), None);
    }
}
