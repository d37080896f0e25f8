use serde::{Deserialize, Serialize};

use super::aggregate::CatalogItem;
use crate::shared::validation::{duplicate_tag, forbidden_characters, required, FieldViolation};

/// Редактируемая проекция элемента каталога (форма редактирования)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogItemForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
}

/// Результаты проверки формы по полям (`None` = поле валидно)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogItemFormErrors {
    pub title: Option<FieldViolation>,
    pub description: Option<FieldViolation>,
    pub category: Option<FieldViolation>,
    /// По одному результату на каждый тег, в том же порядке
    pub tags: Vec<Option<FieldViolation>>,
}

impl CatalogItemFormErrors {
    pub fn is_valid(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.tags.iter().all(Option::is_none)
    }
}

impl CatalogItemForm {
    /// Заполнить форму из существующей записи
    pub fn from_item(item: &CatalogItem) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            category: item.category.clone(),
            tags: item.tags.clone(),
        }
    }

    /// Проверить все поля формы
    ///
    /// Теги проверяются каждый раз полностью: валидность любого тега
    /// зависит от всего набора.
    pub fn validate(&self) -> CatalogItemFormErrors {
        CatalogItemFormErrors {
            title: text_field(&self.title),
            description: text_field(&self.description),
            category: text_field(&self.category),
            tags: (0..self.tags.len())
                .map(|index| {
                    required(&self.tags[index])
                        .and_then(|_| duplicate_tag(&self.tags, index))
                        .err()
                })
                .collect(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }

    /// Добавить пустой тег в конец списка
    pub fn add_tag(&mut self) {
        self.tags.push(String::new());
    }

    /// Удалить тег по позиции; позиция вне списка игнорируется
    pub fn remove_tag(&mut self, index: usize) {
        if index < self.tags.len() {
            self.tags.remove(index);
        }
    }

    /// Собрать обновлённую запись для сохранения
    ///
    /// Поля обрезаются, пустые теги отбрасываются, повторы (после обрезки)
    /// удаляются с сохранением первого вхождения. `id`, `creator`,
    /// `created_at` и `approved` переносятся без изменений.
    pub fn apply_to(&self, item: &CatalogItem) -> CatalogItem {
        let mut tags: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in self.tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
            if !tags.iter().any(|existing| existing == tag) {
                tags.push(tag.to_string());
            }
        }

        CatalogItem {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
            tags,
            ..item.clone()
        }
    }
}

fn text_field(value: &str) -> Option<FieldViolation> {
    required(value)
        .and_then(|_| forbidden_characters(value))
        .err()
}
