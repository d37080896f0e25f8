use leptos::prelude::*;

/// Badge component: "success", "warning", "error", "neutral" (default)
#[component]
pub fn Badge(
    #[prop(optional, into)] variant: MaybeProp<String>,
    /// Дополнительный класс (например, класс полосы балла)
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref() {
        Some("success") => "badge--success",
        Some("warning") => "badge--warning",
        Some("error") => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {} {}", variant_class(), class.get().unwrap_or_default())>
            {children()}
        </span>
    }
}
