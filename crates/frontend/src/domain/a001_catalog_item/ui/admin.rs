use contracts::domain::a001_catalog_item::{CatalogItem, CatalogItemId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::list::{CatalogList, CatalogListStore};
use crate::domain::a001_catalog_item::api;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::components::ui::Button;

pub const APPROVE_ERROR_MESSAGE: &str = "Failed to approve catalog item";

/// Админка: список каталога с редактированием и одобрением
#[component]
#[allow(non_snake_case)]
pub fn AdminPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = CatalogListStore::attach();
    let approving_id = RwSignal::new(None::<CatalogItemId>);
    let message = RwSignal::new(None::<String>);

    let approve = move |id: CatalogItemId| {
        if approving_id.with_untracked(|current| current.as_ref() == Some(&id)) {
            return;
        }
        approving_id.set(Some(id.clone()));
        message.set(None);

        spawn_local(async move {
            match api::approve(&id).await {
                Ok(item) => {
                    log::info!("Catalog item {} approved", item.id);
                    store.refresh();
                }
                Err(e) => {
                    log::error!("Approval of catalog item {} failed: {}", id, e);
                    let _ = message.try_set(Some(APPROVE_ERROR_MESSAGE.to_string()));
                }
            }
            let _ = approving_id.try_set(None);
        });
    };

    let actions = Callback::new(move |item: CatalogItem| {
        let edit_id = item.id.clone();
        let approve_id = item.id.clone();
        let busy_id = item.id.clone();
        let can_approve = item.can_be_approved() && !item.approved;

        view! {
            <div class="catalog-list__actions">
                <Button
                    variant="secondary"
                    size="sm"
                    on_click=Callback::new(move |_| ctx.navigate(Page::Edit(edit_id.clone())))
                >
                    "Edit"
                </Button>
                <Show when=move || can_approve>
                    <Button
                        size="sm"
                        disabled=Signal::derive({
                            let busy_id = busy_id.clone();
                            move || approving_id.with(|current| current.as_ref() == Some(&busy_id))
                        })
                        on_click=Callback::new({
                            let approve_id = approve_id.clone();
                            move |_| approve(approve_id.clone())
                        })
                    >
                        "Approve"
                    </Button>
                </Show>
            </div>
        }
        .into_any()
    });

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Administration"</h1>
            </div>
            {move || message.get().map(|e| view! { <div class="warning-box">{e}</div> })}
            <CatalogList store=store actions=actions />
        </div>
    }
}
