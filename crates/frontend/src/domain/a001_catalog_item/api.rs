//! Репозиторий каталога на стороне клиента (REST API backend)

use contracts::domain::a001_catalog_item::{CatalogError, CatalogItem, CatalogItemId};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

const BASE_PATH: &str = "/api/catalog-items";

fn item_url(id: &CatalogItemId) -> String {
    api_url(&format!("{}/{}", BASE_PATH, urlencoding::encode(id.as_str())))
}

/// Получить все элементы каталога
pub async fn fetch_all() -> Result<Vec<CatalogItem>, CatalogError> {
    let response = Request::get(&api_url(BASE_PATH))
        .send()
        .await
        .map_err(|e| CatalogError::Fetch(e.to_string()))?;

    if !response.ok() {
        return Err(CatalogError::Fetch(format!("HTTP {}", response.status())));
    }

    response
        .json()
        .await
        .map_err(|e| CatalogError::Fetch(e.to_string()))
}

/// Получить элемент по ID
pub async fn fetch_by_id(id: &CatalogItemId) -> Result<CatalogItem, CatalogError> {
    let response = Request::get(&item_url(id))
        .send()
        .await
        .map_err(|e| CatalogError::Fetch(e.to_string()))?;

    match response.status() {
        404 => Err(CatalogError::NotFound(id.to_string())),
        status if !response.ok() => Err(CatalogError::Fetch(format!("HTTP {}", status))),
        _ => response
            .json()
            .await
            .map_err(|e| CatalogError::Fetch(e.to_string())),
    }
}

/// Сохранить запись целиком
pub async fn update(item: &CatalogItem) -> Result<CatalogItem, CatalogError> {
    let response = Request::put(&item_url(&item.id))
        .json(item)
        .map_err(|e| CatalogError::Update(e.to_string()))?
        .send()
        .await
        .map_err(|e| CatalogError::Update(e.to_string()))?;

    if !response.ok() {
        return Err(CatalogError::Update(format!("HTTP {}", response.status())));
    }

    response
        .json()
        .await
        .map_err(|e| CatalogError::Update(e.to_string()))
}

/// Одобрить элемент: перечитать его и сохранить с `approved = true`
///
/// Два запроса, не атомарно.
pub async fn approve(id: &CatalogItemId) -> Result<CatalogItem, CatalogError> {
    let item = fetch_by_id(id).await?;
    update(&item.into_approved()).await
}
