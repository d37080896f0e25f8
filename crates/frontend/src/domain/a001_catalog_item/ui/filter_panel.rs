use contracts::enums::SortOption;
use leptos::prelude::*;

use crate::shared::components::ui::{Button, Select};
use crate::shared::state::filter_state::use_filter_state;

/// Панель фильтров: категория и сортировка по баллу
///
/// Пишет напрямую в фильтры сессии.
#[component]
#[allow(non_snake_case)]
pub fn FilterPanel(categories: ReadSignal<Vec<String>>) -> impl IntoView {
    let filters = use_filter_state();

    let category_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "All categories".to_string())];
        options.extend(categories.get().into_iter().map(|c| (c.clone(), c)));
        options
    });

    let sort_options = Signal::derive(|| {
        SortOption::all()
            .into_iter()
            .map(|s| (s.code().to_string(), s.display_name().to_string()))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="filter-panel">
            <Select
                label="Category"
                value=Signal::derive(move || filters.get().category)
                options=category_options
                on_change=Callback::new(move |category: String| filters.set_category(category))
            />
            <Select
                label="Sort"
                value=Signal::derive(move || filters.get().sort_by.code().to_string())
                options=sort_options
                on_change=Callback::new(move |code: String| {
                    filters.set_sort_by(SortOption::from_code(&code).unwrap_or_default())
                })
            />
            <Button
                variant="ghost"
                size="sm"
                disabled=Signal::derive(move || !filters.has_active_filters())
                on_click=Callback::new(move |_| filters.reset())
            >
                "Reset filters"
            </Button>
        </div>
    }
}
