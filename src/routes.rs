use axum::{
    extract::State,
    routing::{get, post},
    Router,
    Json,
};
use serde_json::{json, Value};
use tower_http::services::ServeDir;

use crate::detect::interface::{DetectionRequest, DetectionResponse};
use crate::error::ApiError;
use crate::state::AppState;
use crate::translate::interface::{TranslationRequest, TranslationResponse};

pub fn create_routes(state: AppState) -> Router<AppState> {
    let system_config = &state.config.system_config;

    Router::new()
        // Live translate session
        .route("/live", get(crate::websocket::websocket_handler))

        // Health check
        .route("/api/health", get(health_check))

        // REST API routes
        .route("/api/translate", post(translate_text))
        .route("/api/detect", post(detect_language))

        // Static UI
        .fallback_service(ServeDir::new(&system_config.public_dir))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "translator": state.translator.name(),
    }))
}

async fn translate_text(
    State(state): State<AppState>,
    Json(request): Json<TranslationRequest>,
) -> Result<Json<TranslationResponse>, ApiError> {
    Ok(Json(translate(&state, &request).await?))
}

async fn detect_language(
    State(state): State<AppState>,
    Json(request): Json<DetectionRequest>,
) -> Result<Json<DetectionResponse>, ApiError> {
    Ok(Json(detect(&state, &request).await?))
}

/// Resolve the source language, delegate to the provider and shape the
/// response. Shared by the REST handler and the live session.
pub(crate) async fn translate(
    state: &AppState,
    request: &TranslationRequest,
) -> Result<TranslationResponse, ApiError> {
    let text = request
        .text
        .as_deref()
        .filter(|text| !text.is_empty())
        .ok_or(ApiError::MissingParameters)?;
    let target = request
        .target_language
        .as_deref()
        .filter(|target| !target.is_empty())
        .ok_or(ApiError::MissingParameters)?;

    let requested_auto = request.source_language == "auto";
    let source = if requested_auto {
        state
            .detector
            .detect(text)
            .await
            .map_err(ApiError::Translation)?
    } else {
        request.source_language.clone()
    };

    // Identity pairs skip the provider entirely.
    let translated_text = if source == target {
        text.to_string()
    } else {
        state
            .translator
            .translate(text, &source, target)
            .await
            .map_err(ApiError::Translation)?
    };

    Ok(TranslationResponse {
        translated_text,
        detected_language: requested_auto.then_some(source),
    })
}

pub(crate) async fn detect(
    state: &AppState,
    request: &DetectionRequest,
) -> Result<DetectionResponse, ApiError> {
    let text = request
        .text
        .as_deref()
        .filter(|text| !text.is_empty())
        .ok_or(ApiError::MissingText)?;

    let detected_language = state
        .detector
        .detect(text)
        .await
        .map_err(ApiError::Detection)?;

    Ok(DetectionResponse { detected_language })
}
