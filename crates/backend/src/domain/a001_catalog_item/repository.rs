use contracts::domain::a001_catalog_item::{CatalogItem, CatalogItemId};
use std::path::PathBuf;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::shared::data::json_file::{read_json, write_json};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("catalog item not found: {0}")]
    NotFound(CatalogItemId),

    #[error("item id {body} does not match path id {path}")]
    IdMismatch {
        path: CatalogItemId,
        body: CatalogItemId,
    },

    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Хранилище коллекции каталога
///
/// Записи живут в памяти; если задан файл, каждое изменение зеркалируется
/// в него целиком (аналог localStorage у исходного мок-API).
pub struct CatalogRepository {
    items: RwLock<Vec<CatalogItem>>,
    file: Option<PathBuf>,
}

impl CatalogRepository {
    /// Хранилище без файла (для тестов и временного запуска)
    pub fn in_memory(items: Vec<CatalogItem>) -> Self {
        Self {
            items: RwLock::new(items),
            file: None,
        }
    }

    /// Открыть хранилище на файле
    ///
    /// Если файла нет, коллекция заполняется `seed()` и сразу записывается.
    pub async fn open(
        path: PathBuf,
        seed: impl FnOnce() -> Vec<CatalogItem>,
    ) -> Result<Self, StoreError> {
        let items = match read_json::<Vec<CatalogItem>>(&path).await? {
            Some(items) => {
                tracing::info!("Loaded {} catalog items from {}", items.len(), path.display());
                items
            }
            None => {
                let items = seed();
                write_json(&path, &items).await?;
                tracing::info!("Seeded {} catalog items into {}", items.len(), path.display());
                items
            }
        };

        Ok(Self {
            items: RwLock::new(items),
            file: Some(path),
        })
    }

    pub async fn list_all(&self) -> Vec<CatalogItem> {
        self.items.read().await.clone()
    }

    pub async fn get_by_id(&self, id: &CatalogItemId) -> Option<CatalogItem> {
        self.items
            .read()
            .await
            .iter()
            .find(|item| &item.id == id)
            .cloned()
    }

    /// Заменить запись целиком (по id)
    ///
    /// Память меняется только после успешной записи файла.
    pub async fn replace(&self, item: CatalogItem) -> Result<CatalogItem, StoreError> {
        let mut items = self.items.write().await;
        let index = items
            .iter()
            .position(|existing| existing.id == item.id)
            .ok_or_else(|| StoreError::NotFound(item.id.clone()))?;

        if let Some(path) = &self.file {
            let mut updated = items.clone();
            updated[index] = item.clone();
            write_json(path, &updated).await?;
            *items = updated;
        } else {
            items[index] = item.clone();
        }
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_catalog_item::seed::default_items;

    #[tokio::test]
    async fn test_open_seeds_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db").join("catalog-items.json");

        let repo = CatalogRepository::open(path.clone(), default_items).await.unwrap();
        assert_eq!(repo.list_all().await.len(), default_items().len());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_open_prefers_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog-items.json");
        let single = vec![default_items().remove(0)];
        write_json(&path, &single).await.unwrap();

        let repo = CatalogRepository::open(path, || panic!("must not seed"))
            .await
            .unwrap();
        assert_eq!(repo.list_all().await, single);
    }

    #[tokio::test]
    async fn test_replace_persists_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog-items.json");
        let repo = CatalogRepository::open(path.clone(), default_items).await.unwrap();

        let mut item = repo.get_by_id(&CatalogItemId::new("3")).await.unwrap();
        item.approved = true;
        repo.replace(item).await.unwrap();

        let reopened = CatalogRepository::open(path, || panic!("must not seed"))
            .await
            .unwrap();
        let stored = reopened.get_by_id(&CatalogItemId::new("3")).await.unwrap();
        assert!(stored.approved);
    }

    #[tokio::test]
    async fn test_failed_write_keeps_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let db_dir = dir.path().join("db");
        let path = db_dir.join("catalog-items.json");
        let repo = CatalogRepository::open(path, default_items).await.unwrap();

        // каталог подменён обычным файлом, запись невозможна
        tokio::fs::remove_dir_all(&db_dir).await.unwrap();
        tokio::fs::write(&db_dir, b"not a directory").await.unwrap();

        let id = CatalogItemId::new("3");
        let mut item = repo.get_by_id(&id).await.unwrap();
        item.approved = true;

        let result = repo.replace(item).await;
        assert!(matches!(result, Err(StoreError::Storage(_))));
        assert!(!repo.get_by_id(&id).await.unwrap().approved);
    }

    #[tokio::test]
    async fn test_replace_unknown_id() {
        let repo = CatalogRepository::in_memory(default_items());
        let mut item = default_items().remove(0);
        item.id = CatalogItemId::new("missing");

        let result = repo.replace(item).await;
        assert!(matches!(result, Err(StoreError::NotFound(id)) if id.as_str() == "missing"));
    }
}
