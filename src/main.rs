use std::any::Any;
use std::sync::Arc;

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::sync::RwLock;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

mod config;
mod error;
mod handlers;
mod models;
mod store;

use crate::config::Config;
use crate::store::ItemStore;

/// Shared application state — cheap to clone (all heap behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<ItemStore>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(ItemStore::new())),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,clothing_inventory=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("Starting Clothing Inventory Server on port {}...", config.port);

    let state = AppState::new();
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);
    info!("Try it: cargo run --bin smoke-client");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    // Method routers carry their own fallback so that an unsupported method on
    // a known path answers 404 ENDPOINT_NOT_FOUND instead of a bare 405.
    Router::new()
        .route(
            "/",
            get(handlers::api_index).fallback(handlers::clothing::endpoint_not_found),
        )
        .route(
            "/clothing",
            get(handlers::clothing::list_items)
                .post(handlers::clothing::create_item)
                .fallback(handlers::clothing::endpoint_not_found),
        )
        .route(
            "/clothing/:barcode",
            get(handlers::clothing::get_item)
                .delete(handlers::clothing::delete_item)
                .fallback(handlers::clothing::endpoint_not_found),
        )
        .fallback(handlers::clothing::endpoint_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// A panicking handler must not take the server down; render the same generic
/// envelope the error type uses for internal failures.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    error!(detail, "Request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "status": "error",
            "code": "INTERNAL_ERROR",
            "message": "Internal server error",
        })),
    )
        .into_response()
}
