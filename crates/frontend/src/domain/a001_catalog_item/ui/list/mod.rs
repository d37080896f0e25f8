pub mod store;

use contracts::domain::a001_catalog_item::CatalogItem;
use leptos::prelude::*;

use super::filter_panel::FilterPanel;
use super::score_badge::ScoreBadge;
use crate::domain::a001_catalog_item::pipeline::SEARCH_DEBOUNCE_MS;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::components::ui::Button;
use crate::shared::list_utils::SearchInput;
use crate::shared::state::search_state::use_search_state;
pub use store::CatalogListStore;

/// Список каталога с поиском и фильтрами
///
/// `actions` рисует дополнительные кнопки в строке (админка).
#[component]
#[allow(non_snake_case)]
pub fn CatalogList(
    store: CatalogListStore,
    #[prop(optional)] actions: Option<Callback<CatalogItem, AnyView>>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let search = use_search_state();
    let state = store.state();

    let on_search = Callback::new(move |query: String| search.set(query));

    let render_row = move |item: CatalogItem| {
        let id = item.id.clone();
        let score = item.score();
        let tags = item.tags.join(", ");
        view! {
            <li class="catalog-list__item">
                <div class="catalog-list__main">
                    <a
                        class="catalog-list__title"
                        href="#"
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate(Page::Details(id.clone()));
                        }
                    >
                        {item.title.clone()}
                    </a>
                    <span class="catalog-list__category">{item.category.clone()}</span>
                    <span class="catalog-list__tags">{tags}</span>
                </div>
                <div class="catalog-list__meta">
                    <ScoreBadge score=score />
                    {item.approved.then(|| view! { <span class="catalog-list__approved">"Approved"</span> })}
                    {actions.map(|render| render.run(item.clone()))}
                </div>
            </li>
        }
    };

    view! {
        <div class="catalog-list">
            <div class="catalog-list__toolbar">
                <SearchInput
                    value=Signal::derive(move || search.get())
                    on_change=on_search
                    debounce_ms=SEARCH_DEBOUNCE_MS
                />
                <FilterPanel categories=store.categories() />
                <Button variant="secondary" on_click=Callback::new(move |_| store.refresh())>
                    "Refresh"
                </Button>
            </div>

            {move || {
                let current = state.get();
                if current.loading {
                    return view! { <div class="catalog-list__loading">"Loading..."</div> }.into_any();
                }
                if let Some(error) = current.error {
                    return view! {
                        <div class="warning-box">
                            <span class="warning-box__text">{error}</span>
                        </div>
                    }
                    .into_any();
                }

                let searching = current.searching;
                let items = current.items.unwrap_or_default();
                let empty = items.is_empty();
                view! {
                    <div class={if searching { "catalog-list__body catalog-list--searching" } else { "catalog-list__body" }}>
                        <Show when=move || searching>
                            <div class="catalog-list__searching">"Searching..."</div>
                        </Show>
                        <Show when=move || empty && !searching>
                            <div class="catalog-list__empty">"No catalog items found"</div>
                        </Show>
                        <ul class="catalog-list__items">
                            {items.into_iter().map(render_row).collect_view()}
                        </ul>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

/// Публичная страница каталога
#[component]
#[allow(non_snake_case)]
pub fn CatalogListPage() -> impl IntoView {
    let store = CatalogListStore::attach();

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Catalog"</h1>
            </div>
            <CatalogList store=store />
        </div>
    }
}
