use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::score::{classify, compute_score, ScoreBand};

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор элемента каталога (непрозрачная строка, не меняется после создания)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogItemId(pub String);

impl CatalogItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CatalogItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CatalogItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Элемент каталога
///
/// `id`, `creator` и `created_at` неизменяемы; `approved` меняется только
/// через операцию одобрения. Оценка качества не хранится, а всегда
/// вычисляется из текущих полей.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: CatalogItemId,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub creator: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub approved: bool,
}

impl CatalogItem {
    /// Создать новый (неодобренный) элемент
    pub fn new(
        id: CatalogItemId,
        title: String,
        description: String,
        category: String,
        tags: Vec<String>,
        creator: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            category,
            tags,
            creator,
            created_at,
            approved: false,
        }
    }

    /// Текущая оценка качества (0..=100)
    pub fn score(&self) -> u8 {
        compute_score(self)
    }

    /// Диапазон качества для текущей оценки
    pub fn band(&self) -> &'static ScoreBand {
        classify(f64::from(self.score()))
    }

    /// Можно ли одобрить элемент
    pub fn can_be_approved(&self) -> bool {
        self.band().can_approve
    }

    /// Копия записи с выставленным флагом одобрения
    pub fn into_approved(mut self) -> Self {
        self.approved = true;
        self
    }

    /// Перенести неизменяемые поля из сохранённой записи
    pub fn keep_immutable_from(&mut self, stored: &CatalogItem) {
        self.id = stored.id.clone();
        self.creator = stored.creator.clone();
        self.created_at = stored.created_at;
    }
}
