use leptos::prelude::*;

/// Button: variants primary (default) / secondary / ghost, size md (default) / sm
#[component]
pub fn Button(
    #[prop(optional, into)] variant: MaybeProp<String>,
    #[prop(optional, into)] size: MaybeProp<String>,
    /// "button" по умолчанию; "submit" внутри формы
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = move || {
        let variant = match variant.get().as_deref() {
            Some("secondary") => "button--secondary",
            Some("ghost") => "button--ghost",
            _ => "button--primary",
        };
        match size.get().as_deref() {
            Some("sm") => format!("button {} button--small", variant),
            _ => format!("button {}", variant),
        }
    };

    view! {
        <button
            type=move || button_type.get().unwrap_or_else(|| "button".to_string())
            class=class
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
