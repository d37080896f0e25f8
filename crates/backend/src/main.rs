pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use domain::a001_catalog_item::{seed::default_items, CatalogRepository};
use shared::app_state::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let storage_path = config.storage_path();

    let repository = CatalogRepository::open(storage_path, default_items)
        .await
        .map_err(|e| anyhow::anyhow!("catalog storage init failed: {e}"))?;
    let state = AppState::new(repository);

    let app = routes::configure_routes(state);

    let addr = config.bind_addr()?;
    tracing::info!("Starting catalog server on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
