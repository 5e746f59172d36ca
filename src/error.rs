use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub type AppResult<T> = Result<T, AppError>;

/// Request-level failures. Every variant maps to a stable machine-readable
/// `code` and a fixed status; none of them terminate the server.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Clothing item with barcode {0} does not exist")]
    ItemNotFound(String),

    #[error("Clothing item with barcode {0} already exists")]
    ItemExists(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid JSON data")]
    InvalidJson,

    #[error("The requested endpoint does not exist")]
    EndpointNotFound,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ItemNotFound(_) | Self::EndpointNotFound => StatusCode::NOT_FOUND,
            Self::ItemExists(_) => StatusCode::CONFLICT,
            Self::MissingField(_) | Self::InvalidJson => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::ItemNotFound(_) => "ITEM_NOT_FOUND",
            Self::ItemExists(_) => "ITEM_EXISTS",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidJson => "INVALID_JSON",
            Self::EndpointNotFound => "ENDPOINT_NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Internal details go to the log, never to the client.
        let message = match &self {
            Self::Internal(err) => {
                error!(error = %err, "Unhandled error while processing request");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (
            self.status(),
            Json(json!({
                "status": "error",
                "code": self.code(),
                "message": message,
            })),
        )
            .into_response()
    }
}
