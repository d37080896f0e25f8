use super::repository::{CatalogRepository, StoreError};
use contracts::domain::a001_catalog_item::{CatalogItem, CatalogItemId};

/// Получение списка всех элементов каталога
pub async fn list_all(repo: &CatalogRepository) -> Vec<CatalogItem> {
    repo.list_all().await
}

/// Получение элемента по ID
pub async fn get_by_id(repo: &CatalogRepository, id: &CatalogItemId) -> Result<CatalogItem, StoreError> {
    repo.get_by_id(id)
        .await
        .ok_or_else(|| StoreError::NotFound(id.clone()))
}

/// Полная замена записи
///
/// `id` в теле должен совпадать с `id` в пути. `creator` и `created_at`
/// берутся из сохранённой записи, остальные поля (включая `approved`) из тела.
pub async fn update(
    repo: &CatalogRepository,
    path_id: &CatalogItemId,
    mut item: CatalogItem,
) -> Result<CatalogItem, StoreError> {
    if &item.id != path_id {
        return Err(StoreError::IdMismatch {
            path: path_id.clone(),
            body: item.id,
        });
    }

    let stored = get_by_id(repo, path_id).await?;
    item.keep_immutable_from(&stored);

    if item.approved && !stored.approved {
        tracing::info!(
            "Catalog item {} approved (score {}, band {})",
            item.id,
            item.score(),
            item.band().name.as_str()
        );
    }

    let saved = repo.replace(item).await?;
    tracing::debug!("Catalog item {} updated", saved.id);
    Ok(saved)
}
