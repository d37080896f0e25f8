use thiserror::Error;

/// Ошибки операций репозитория каталога
///
/// Ошибки валидации формы сюда не попадают: они возвращаются по полям
/// (см. `CatalogItemFormErrors`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Не удалось загрузить список или отдельный элемент
    #[error("Failed to load catalog data: {0}")]
    Fetch(String),

    /// Элемент с таким id не найден
    #[error("Catalog item not found: {0}")]
    NotFound(String),

    /// Не удалось сохранить (или одобрить) элемент
    #[error("Failed to save catalog item: {0}")]
    Update(String),
}
