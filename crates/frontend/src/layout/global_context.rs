use contracts::domain::a001_catalog_item::CatalogItemId;
use leptos::prelude::*;
use web_sys::window;

/// Страница приложения
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    List,
    Admin,
    Details(CatalogItemId),
    Edit(CatalogItemId),
}

impl Page {
    pub fn path(&self) -> String {
        match self {
            Page::List => "/".to_string(),
            Page::Admin => "/admin".to_string(),
            Page::Details(id) => format!("/details/{}", urlencoding::encode(id.as_str())),
            Page::Edit(id) => format!("/edit/{}", urlencoding::encode(id.as_str())),
        }
    }

    /// Разбор пути; неизвестный путь ведёт на список
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

        match segments.as_slice() {
            ["admin"] => Page::Admin,
            ["details", raw] => decode_id(raw).map(Page::Details).unwrap_or(Page::List),
            ["edit", raw] => decode_id(raw).map(Page::Edit).unwrap_or(Page::List),
            _ => Page::List,
        }
    }

    /// Раздел администратора (для подсветки в шапке)
    pub fn is_admin_area(&self) -> bool {
        matches!(self, Page::Admin | Page::Edit(_))
    }
}

fn decode_id(raw: &str) -> Option<CatalogItemId> {
    if raw.is_empty() {
        return None;
    }
    urlencoding::decode(raw)
        .map(|decoded| CatalogItemId::new(decoded.into_owned()))
        .ok()
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::List),
        }
    }

    /// Начальная страница из адресной строки
    pub fn init_router_integration(&self) {
        let path = window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        self.page.set(Page::from_path(&path));
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate: {:?}", page);
        let new_url = page.path();
        self.page.set(page);

        let current = window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        if current != new_url {
            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Page::from_path("/"), Page::List);
        assert_eq!(Page::from_path("/admin"), Page::Admin);
        assert_eq!(Page::from_path("/details/7"), Page::Details(CatalogItemId::new("7")));
        assert_eq!(Page::from_path("/edit/4/"), Page::Edit(CatalogItemId::new("4")));
        assert_eq!(Page::from_path("/details/"), Page::List);
        assert_eq!(Page::from_path("/unknown/route"), Page::List);
    }

    #[test]
    fn test_path_round_trip_with_encoded_id() {
        let page = Page::Edit(CatalogItemId::new("a b"));
        assert_eq!(page.path(), "/edit/a%20b");
        assert_eq!(Page::from_path(&page.path()), page);
    }

    #[test]
    fn test_admin_area() {
        assert!(Page::Edit(CatalogItemId::new("1")).is_admin_area());
        assert!(!Page::Details(CatalogItemId::new("1")).is_admin_area());
    }
}
