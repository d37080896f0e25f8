use leptos::prelude::*;

/// Выпадающий список; `options` задаются парами (значение, подпись)
#[component]
pub fn Select(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <select
                class="form__select"
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, text)| {
                        let selected_val = val.clone();
                        view! {
                            <option value=val selected=move || value.get() == selected_val>
                                {text}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
