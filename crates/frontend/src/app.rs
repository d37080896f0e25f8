use crate::domain::a001_catalog_item::ui::admin::AdminPage;
use crate::domain::a001_catalog_item::ui::details::CatalogDetails;
use crate::domain::a001_catalog_item::ui::edit::CatalogEdit;
use crate::domain::a001_catalog_item::ui::list::CatalogListPage;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::Shell;
use crate::shared::state::{FilterStateStore, SearchStateStore};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    ctx.init_router_integration();
    provide_context(ctx);

    // Поиск и фильтры живут всю сессию и общие для всех страниц
    provide_context(SearchStateStore::new());
    provide_context(FilterStateStore::new());

    view! {
        <Shell center=move || match ctx.page.get() {
            Page::List => view! { <CatalogListPage /> }.into_any(),
            Page::Admin => view! { <AdminPage /> }.into_any(),
            Page::Details(id) => view! { <CatalogDetails id=id /> }.into_any(),
            Page::Edit(id) => view! { <CatalogEdit id=id /> }.into_any(),
        } />
    }
}
