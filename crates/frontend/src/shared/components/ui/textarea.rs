use leptos::prelude::*;

/// Многострочное поле с подписью и сообщением об ошибке
#[component]
pub fn Textarea(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] required: bool,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional, into)] error: MaybeProp<String>,
) -> impl IntoView {
    let invalid = move || error.get().is_some();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <textarea
                class=move || if invalid() { "form__textarea form__input--invalid" } else { "form__textarea" }
                prop:value=move || value.get()
                required=required
                rows=rows.unwrap_or(3)
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
