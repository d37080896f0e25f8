use contracts::domain::a001_catalog_item::{
    CatalogItem, CatalogItemForm, CatalogItemFormErrors, CatalogItemId,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_catalog_item::api;
use crate::domain::a001_catalog_item::ui::load_error_message;

pub const SAVE_ERROR_MESSAGE: &str = "Failed to save changes";

/// ViewModel формы редактирования элемента каталога
#[derive(Clone, Copy)]
pub struct CatalogEditViewModel {
    pub item: RwSignal<Option<CatalogItem>>,
    pub form: RwSignal<CatalogItemForm>,
    pub loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub save_error: RwSignal<Option<String>>,
}

impl CatalogEditViewModel {
    pub fn new() -> Self {
        Self {
            item: RwSignal::new(None),
            form: RwSignal::new(CatalogItemForm::default()),
            loading: RwSignal::new(false),
            load_error: RwSignal::new(None),
            saving: RwSignal::new(false),
            save_error: RwSignal::new(None),
        }
    }

    /// Загрузить элемент и заполнить форму
    pub fn load(&self, id: CatalogItemId) {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            let result = api::fetch_by_id(&id).await;
            let _ = this.loading.try_set(false);
            match result {
                Ok(item) => this.fill(item),
                Err(e) => {
                    log::warn!("Catalog item {} failed to load for editing: {}", id, e);
                    let _ = this.load_error.try_set(Some(load_error_message(&e).to_string()));
                }
            }
        });
    }

    fn fill(&self, item: CatalogItem) {
        let _ = self.form.try_set(CatalogItemForm::from_item(&item));
        let _ = self.item.try_set(Some(item));
    }

    /// Результаты проверки по полям (реактивно)
    pub fn errors(&self) -> CatalogItemFormErrors {
        self.form.with(CatalogItemForm::validate)
    }

    pub fn can_submit(&self) -> bool {
        self.item.with(Option::is_some) && !self.saving.get() && self.errors().is_valid()
    }

    pub fn set_title(&self, value: String) {
        self.form.update(|f| f.title = value);
    }

    pub fn set_description(&self, value: String) {
        self.form.update(|f| f.description = value);
    }

    pub fn set_category(&self, value: String) {
        self.form.update(|f| f.category = value);
    }

    pub fn set_tag(&self, index: usize, value: String) {
        self.form.update(|f| {
            if let Some(tag) = f.tags.get_mut(index) {
                *tag = value;
            }
        });
    }

    pub fn add_tag(&self) {
        self.form.update(CatalogItemForm::add_tag);
    }

    pub fn remove_tag(&self, index: usize) {
        self.form.update(|f| f.remove_tag(index));
    }

    /// Сохранить; повторное нажатие во время сохранения игнорируется
    pub fn save_command(&self, on_saved: Callback<CatalogItem>) {
        let Some(current) = self.item.get_untracked() else {
            return;
        };
        if self.saving.get_untracked() || !self.form.with_untracked(CatalogItemForm::is_valid) {
            return;
        }

        let updated = self.form.with_untracked(|f| f.apply_to(&current));
        self.saving.set(true);
        self.save_error.set(None);

        let this = *self;
        spawn_local(async move {
            let result = api::update(&updated).await;
            let _ = this.saving.try_set(false);
            match result {
                Ok(saved) => {
                    log::info!("Catalog item {} saved", saved.id);
                    on_saved.run(saved);
                }
                Err(e) => {
                    log::error!("Catalog item {} save failed: {}", updated.id, e);
                    let _ = this.save_error.try_set(Some(SAVE_ERROR_MESSAGE.to_string()));
                }
            }
        });
    }
}

impl Default for CatalogEditViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item() -> CatalogItem {
        CatalogItem::new(
            CatalogItemId::new("3"),
            "Minimalist Desk Lamp".into(),
            "LED desk lamp with adjustable brightness and color temperature.".into(),
            "Lighting".into(),
            vec!["LED".into()],
            "carol@example.com".into(),
            Utc::now(),
        )
    }

    #[test]
    fn test_tag_edits_revalidate_every_tag() {
        let vm = CatalogEditViewModel::new();
        vm.fill(item());

        vm.add_tag();
        let errors = vm.form.with_untracked(CatalogItemForm::validate);
        assert!(errors.tags[0].is_none());
        assert!(errors.tags[1].is_some());

        vm.set_tag(1, " led ".into());
        let errors = vm.form.with_untracked(CatalogItemForm::validate);
        assert!(errors.tags[0].is_some());
        assert!(errors.tags[1].is_some());

        vm.remove_tag(0);
        assert!(vm.form.with_untracked(CatalogItemForm::is_valid));
    }

    #[test]
    fn test_invalid_form_is_not_saved() {
        let vm = CatalogEditViewModel::new();
        vm.fill(item());
        vm.set_title("Lamp <script>".into());

        vm.save_command(Callback::new(|_| {}));
        assert!(!vm.saving.get_untracked());
    }
}
