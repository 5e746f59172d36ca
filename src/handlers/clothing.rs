use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::{CreateItem, REQUIRED_FIELDS},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_items(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let store = state.store.read().await;
    let items = store.barcodes();

    info!(count = items.len(), "Listed clothing items");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "success",
            "count": items.len(),
            "items": items,
        })),
    ))
}

// ── Get by barcode ────────────────────────────────────────────────────────────

pub async fn get_item(
    State(state): State<AppState>,
    Path(barcode): Path<String>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let store = state.store.read().await;
    let item = store
        .get(&barcode)
        .ok_or_else(|| AppError::ItemNotFound(barcode.clone()))?;

    info!(%barcode, "Fetched clothing item");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "success",
            "item": item,
        })),
    ))
}

// ── Create ────────────────────────────────────────────────────────────────────

/// The body is taken raw so that malformed JSON and missing fields can be
/// reported with the service's own error codes rather than axum's rejections.
pub async fn create_item(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let value: serde_json::Value =
        serde_json::from_slice(&body).map_err(|_| AppError::InvalidJson)?;

    // Presence first, in declared order; only the first missing field is
    // reported. A non-object body has no fields and so reports "barcode".
    for field in REQUIRED_FIELDS {
        if value.get(field).is_none() {
            return Err(AppError::MissingField(field));
        }
    }

    let payload: CreateItem =
        serde_json::from_value(value).map_err(|_| AppError::InvalidJson)?;
    let (barcode, item) = payload.into_parts();

    let mut store = state.store.write().await;
    if store.insert(barcode.clone(), item).is_err() {
        return Err(AppError::ItemExists(barcode));
    }

    info!(%barcode, "Added clothing item");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "status": "success",
            "message": "Clothing item added successfully",
            "barcode": barcode,
        })),
    ))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_item(
    State(state): State<AppState>,
    Path(barcode): Path<String>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let mut store = state.store.write().await;
    store
        .remove(&barcode)
        .ok_or_else(|| AppError::ItemNotFound(barcode.clone()))?;

    info!(%barcode, "Removed clothing item");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "success",
            "message": "Clothing item removed successfully",
        })),
    ))
}

// ── Fallback ──────────────────────────────────────────────────────────────────

/// Any method/path combination without a route, including unsupported methods
/// on known paths, answers 404 ENDPOINT_NOT_FOUND.
pub async fn endpoint_not_found() -> AppError {
    AppError::EndpointNotFound
}
