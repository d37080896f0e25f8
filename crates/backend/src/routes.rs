use axum::http::{header, Method};
use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::shared::app_state::AppState;
use crate::system::middleware::request_logger::request_logger;

/// Роуты мок-API каталога
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/catalog-items",
            get(handlers::a001_catalog_item::list_all),
        )
        .route(
            "/api/catalog-items/:id",
            get(handlers::a001_catalog_item::get_by_id).put(handlers::a001_catalog_item::update),
        )
        .with_state(state)
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    // Собранный фронтенд; неизвестные пути отдают index.html (клиентская навигация)
    let frontend = ServeDir::new("dist").fallback(ServeFile::new("dist/index.html"));

    api_routes(state)
        .fallback_service(frontend)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
