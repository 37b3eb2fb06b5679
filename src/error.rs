use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// API error taxonomy. Client errors carry their message to the
/// caller; backend failures return a generic message and the cause is
/// logged server-side only.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required parameters")]
    MissingParameters,

    #[error("Missing text parameter")]
    MissingText,

    #[error("Translation failed")]
    Translation(#[source] anyhow::Error),

    #[error("Language detection failed")]
    Detection(#[source] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameters | ApiError::MissingText => StatusCode::BAD_REQUEST,
            ApiError::Translation(_) | ApiError::Detection(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Translation(cause) => error!("Translation error: {:#}", cause),
            ApiError::Detection(cause) => error!("Language detection error: {:#}", cause),
            _ => {}
        }

        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
