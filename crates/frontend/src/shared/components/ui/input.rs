use leptos::prelude::*;

/// Текстовое поле с подписью и сообщением об ошибке
#[component]
pub fn Input(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional)] required: bool,
    /// Ошибка валидации; поле подсвечивается, текст выводится под ним
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let invalid = move || error.get().is_some();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <input
                type="text"
                class=move || if invalid() { "form__input form__input--invalid" } else { "form__input" }
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                required=required
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
