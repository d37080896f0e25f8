use leptos::prelude::*;

/// Текущий поисковый запрос, один на сессию
///
/// Значение попадает сюда уже после debounce.
#[derive(Clone, Copy)]
pub struct SearchStateStore {
    query: RwSignal<String>,
}

impl SearchStateStore {
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(String::new()),
        }
    }

    /// Реактивное чтение (подписка)
    pub fn get(&self) -> String {
        self.query.get()
    }

    pub fn get_untracked(&self) -> String {
        self.query.get_untracked()
    }

    pub fn set(&self, query: String) {
        log::debug!("search query: '{}'", query);
        self.query.set(query);
    }

    pub fn reset(&self) {
        self.query.set(String::new());
    }
}

impl Default for SearchStateStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_search_state() -> SearchStateStore {
    use_context::<SearchStateStore>().expect("SearchStateStore not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_reset() {
        let store = SearchStateStore::new();
        store.set("lamp".into());
        assert_eq!(store.get_untracked(), "lamp");

        store.reset();
        assert_eq!(store.get_untracked(), "");
    }
}
