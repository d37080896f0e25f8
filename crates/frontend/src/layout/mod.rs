pub mod global_context;

use global_context::{AppGlobalContext, Page};
use leptos::prelude::*;

/// Верхняя панель навигации
#[component]
#[allow(non_snake_case)]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let is_admin = move || ctx.page.with(Page::is_admin_area);

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Catalog Curation"</span>
            </div>
            <nav class="top-header__actions">
                <a
                    href="/"
                    class=move || if is_admin() { "top-header__link" } else { "top-header__link top-header__link--active" }
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Page::List);
                    }
                >
                    "Catalog"
                </a>
                <a
                    href="/admin"
                    class=move || if is_admin() { "top-header__link top-header__link--active" } else { "top-header__link" }
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Page::Admin);
                    }
                >
                    "Admin"
                </a>
            </nav>
        </div>
    }
}

/// Оболочка приложения: шапка + текущая страница
#[component]
#[allow(non_snake_case)]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-main">{center}</div>
        </div>
    }
}
