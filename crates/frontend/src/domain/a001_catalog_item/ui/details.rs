use contracts::domain::a001_catalog_item::{CatalogItem, CatalogItemId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::load_error_message;
use super::score_badge::ScoreBadge;
use crate::domain::a001_catalog_item::api;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::components::ui::Button;

/// Карточка элемента каталога (только просмотр)
#[component]
#[allow(non_snake_case)]
pub fn CatalogDetails(id: CatalogItemId) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let item = RwSignal::new(None::<CatalogItem>);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);

    spawn_local(async move {
        let result = api::fetch_by_id(&id).await;
        let _ = loading.try_set(false);
        match result {
            Ok(loaded) => {
                let _ = item.try_set(Some(loaded));
            }
            Err(e) => {
                log::warn!("Catalog item {} failed to load: {}", id, e);
                let _ = error.try_set(Some(load_error_message(&e).to_string()));
            }
        }
    });

    let render_item = move |item: CatalogItem| {
        let score = item.score();
        let band = item.band();
        view! {
            <div class="details-form">
                <h2>{item.title.clone()}</h2>
                <p class="details__description">{item.description.clone()}</p>
                <dl class="details__fields">
                    <dt>"Category"</dt>
                    <dd>{item.category.clone()}</dd>
                    <dt>"Tags"</dt>
                    <dd>{item.tags.join(", ")}</dd>
                    <dt>"Creator"</dt>
                    <dd>{item.creator.clone()}</dd>
                    <dt>"Created"</dt>
                    <dd>{item.created_at.format("%Y-%m-%d %H:%M").to_string()}</dd>
                    <dt>"Score"</dt>
                    <dd><ScoreBadge score=score /></dd>
                    <dt>"Status"</dt>
                    <dd>
                        {if item.approved {
                            "Approved"
                        } else if band.can_approve {
                            "Awaiting approval"
                        } else {
                            "Needs improvement"
                        }}
                    </dd>
                </dl>
            </div>
        }
    };

    view! {
        <div class="page details-container">
            <div class="details-header">
                <Button variant="secondary" on_click=Callback::new(move |_| ctx.navigate(Page::List))>
                    "Back"
                </Button>
            </div>
            <Show when=move || loading.get()>
                <div class="catalog-list__loading">"Loading..."</div>
            </Show>
            {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}
            {move || item.get().map(render_item)}
        </div>
    }
}
