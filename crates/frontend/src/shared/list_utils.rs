/// Утилиты для работы со списками (поиск, поле поиска с debounce)
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::debounce::Debouncer;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу
    ///
    /// `filter` уже обрезан и приведён к нижнему регистру.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Фильтрует список по поисковому запросу
///
/// Пустой (после обрезки) запрос возвращает список без изменений.
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(&needle))
        .collect()
}

/// Компонент поиска с debounce и кнопкой очистки
///
/// `on_change` вызывается только после паузы ввода `debounce_ms` и только
/// если значение изменилось с прошлого вызова.
#[component]
pub fn SearchInput(
    /// Начальное значение поля
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Задержка debounce, мс
    debounce_ms: u32,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search by title or description".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let input_value = RwSignal::new(value.get_untracked());
    let debouncer = StoredValue::new(Debouncer::<String>::new());

    let handle_input_change = move |new_value: String| {
        input_value.set(new_value.clone());
        let Some(ticket) = debouncer.try_update_value(|d| d.push(new_value)) else {
            return;
        };

        spawn_local(async move {
            TimeoutFuture::new(debounce_ms).await;
            if let Some(Some(value)) = debouncer.try_update_value(|d| d.elapsed(ticket)) {
                on_change.run(value);
            }
        });
    };

    let clear_filter = move |_| {
        input_value.set(String::new());
        if let Some(Some(value)) = debouncer.try_update_value(|d| d.emit_now(String::new())) {
            on_change.run(value);
        }
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || if is_filter_active() { "form__input search-input--active" } else { "form__input" }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    "×"
                </button>
            </Show>
        </div>
    }
}
