pub mod clothing;

use axum::{http::StatusCode, Json};
use serde_json::json;

/// GET / — static API description.
pub async fn api_index() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Clothing Inventory API is running",
            "endpoints": {
                "GET /clothing": "List all clothing items",
                "GET /clothing/{barcode}": "Get clothing details",
                "POST /clothing": "Add a new clothing item",
                "DELETE /clothing/{barcode}": "Remove a clothing item"
            }
        })),
    )
}
