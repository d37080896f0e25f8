use contracts::shared::score::classify;
use leptos::prelude::*;

use crate::shared::components::ui::Badge;

/// Балл качества с названием полосы
#[component]
#[allow(non_snake_case)]
pub fn ScoreBadge(score: u8) -> impl IntoView {
    let band = classify(f64::from(score));
    let variant = if band.can_approve { "success" } else { "warning" };

    view! {
        <Badge variant=variant class=band.css_class>
            {format!("{} · {}", score, band.name.as_str())}
        </Badge>
    }
}
