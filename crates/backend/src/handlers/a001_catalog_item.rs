use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_catalog_item::{CatalogItem, CatalogItemId};

use crate::domain::a001_catalog_item::{service, StoreError};
use crate::shared::app_state::AppState;

fn status_for(error: &StoreError) -> StatusCode {
    match error {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::IdMismatch { .. } => StatusCode::BAD_REQUEST,
        StoreError::Storage(e) => {
            tracing::error!("Catalog storage failure: {e:#}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// GET /api/catalog-items
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<CatalogItem>> {
    Json(service::list_all(&state.catalog).await)
}

/// GET /api/catalog-items/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CatalogItem>, StatusCode> {
    let id = CatalogItemId::new(id);
    service::get_by_id(&state.catalog, &id)
        .await
        .map(Json)
        .map_err(|e| status_for(&e))
}

/// PUT /api/catalog-items/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(item): Json<CatalogItem>,
) -> Result<Json<CatalogItem>, StatusCode> {
    let id = CatalogItemId::new(id);
    match service::update(&state.catalog, &id, item).await {
        Ok(saved) => Ok(Json(saved)),
        Err(e) => {
            tracing::warn!("Update of catalog item {} rejected: {}", id, e);
            Err(status_for(&e))
        }
    }
}
