pub mod view_model;

use contracts::domain::a001_catalog_item::CatalogItemId;
use contracts::shared::validation::FieldViolation;
use leptos::prelude::*;

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::components::ui::{Button, Input, Textarea};
use view_model::CatalogEditViewModel;

fn message(violation: Option<FieldViolation>) -> Option<String> {
    violation.map(|v| v.message())
}

/// Форма редактирования элемента каталога
#[component]
#[allow(non_snake_case)]
pub fn CatalogEdit(id: CatalogItemId) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = CatalogEditViewModel::new();
    vm.load(id);

    let tag_count = Memo::new(move |_| vm.form.with(|f| f.tags.len()));

    let render_tag = move |index: usize| {
        view! {
            <div class="edit-form__tag">
                <Input
                    value=Signal::derive(move || {
                        vm.form.with(|f| f.tags.get(index).cloned().unwrap_or_default())
                    })
                    on_input=Callback::new(move |value: String| vm.set_tag(index, value))
                    placeholder="Tag"
                    error=Signal::derive(move || message(vm.errors().tags.get(index).cloned().flatten()))
                />
                <Button variant="ghost" size="sm" on_click=Callback::new(move |_| vm.remove_tag(index))>
                    "Remove"
                </Button>
            </div>
        }
    };

    let save = move || {
        vm.save_command(Callback::new(move |_| ctx.navigate(Page::Admin)));
    };

    view! {
        <div class="page details-container">
            <div class="details-header">
                <h1 class="header__title">"Edit catalog item"</h1>
            </div>

            <Show when=move || vm.loading.get()>
                <div class="catalog-list__loading">"Loading..."</div>
            </Show>
            {move || vm.load_error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

            <Show when=move || vm.item.with(Option::is_some)>
                <form
                    class="details-form edit-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        save();
                    }
                >
                    <Input
                        label="Title"
                        value=Signal::derive(move || vm.form.with(|f| f.title.clone()))
                        on_input=Callback::new(move |value: String| vm.set_title(value))
                        required=true
                        error=Signal::derive(move || message(vm.errors().title))
                    />

                    <Textarea
                        label="Description"
                        value=Signal::derive(move || vm.form.with(|f| f.description.clone()))
                        on_input=Callback::new(move |value: String| vm.set_description(value))
                        rows=4
                        required=true
                        error=Signal::derive(move || message(vm.errors().description))
                    />

                    <Input
                        label="Category"
                        value=Signal::derive(move || vm.form.with(|f| f.category.clone()))
                        on_input=Callback::new(move |value: String| vm.set_category(value))
                        required=true
                        error=Signal::derive(move || message(vm.errors().category))
                    />

                    <div class="edit-form__tags">
                        <label class="form__label">"Tags"</label>
                        {move || (0..tag_count.get()).map(render_tag).collect_view()}
                        <Button variant="secondary" size="sm" on_click=Callback::new(move |_| vm.add_tag())>
                            "Add tag"
                        </Button>
                    </div>

                    {move || vm.save_error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

                    <div class="details-actions">
                        <Button button_type="submit" disabled=Signal::derive(move || !vm.can_submit())>
                            {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                        </Button>
                        <Button variant="secondary" on_click=Callback::new(move |_| ctx.navigate(Page::Admin))>
                            "Cancel"
                        </Button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
