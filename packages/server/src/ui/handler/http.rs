//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State, http::HeaderMap, http::StatusCode};

use agora_shared::protocol::MessageDto;

use crate::ui::{auth::require_author, error::ApiError, state::AppState};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// List the full ordered message history. No authentication required.
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MessageDto>>, ApiError> {
    let messages = state.list_messages_usecase.execute().await?;
    Ok(Json(messages))
}

/// Post a message. Authentication first, then payload validation, so the
/// 401/400 precedence of the gateway state machine holds. The body is
/// taken as raw bytes to keep malformed payloads on the 400 path.
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageDto>), ApiError> {
    let author_id = require_author(&state, &headers).await?;

    let payload: serde_json::Value = serde_json::from_slice(&body)
        .map_err(|e| ApiError::InvalidPayload(format!("malformed JSON body: {e}")))?;
    let content = payload
        .get("content")
        .and_then(|value| value.as_str())
        .ok_or_else(|| ApiError::InvalidPayload("missing content field".to_string()))?
        .to_string();

    let message = state
        .post_message_usecase
        .execute(author_id, content)
        .await?;

    Ok((StatusCode::CREATED, Json(message.into())))
}

/// Clear the whole room history.
pub async fn clear_messages(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
    require_author(&state, &headers).await?;
    state.clear_messages_usecase.execute().await?;
    Ok(Json(serde_json::json!({"status": "ok"})))
}

/// Delete every message posted by the calling author.
pub async fn delete_own_messages(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
    let author_id = require_author(&state, &headers).await?;
    state.delete_own_messages_usecase.execute(author_id).await?;
    Ok(Json(serde_json::json!({"status": "ok"})))
}
