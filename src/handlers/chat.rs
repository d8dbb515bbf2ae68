use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::services::conversation;
use crate::state::AppState;

const MAX_SESSION_ID_LEN: usize = 128;

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
}

pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let session_id = match payload.session_id.as_deref().map(str::trim) {
        Some(id) if id.chars().count() > MAX_SESSION_ID_LEN => {
            return Err(AppError::BadRequest(format!(
                "session_id longer than {MAX_SESSION_ID_LEN} characters"
            )));
        }
        Some(id) if !id.is_empty() => id.to_string(),
        _ => uuid::Uuid::new_v4().to_string(),
    };
    let query = payload.query.trim();

    tracing::info!(session_id = %session_id, "incoming chat message");
    tracing::debug!(session_id = %session_id, query = %query, "chat message body");

    let response = conversation::process_message(&state, &session_id, query)
        .await
        .map_err(|e| {
            tracing::error!(session_id = %session_id, error = %e, "failed to process message");
            AppError::Session(e.to_string())
        })?;

    Ok(Json(ChatResponse {
        response,
        session_id,
    }))
}
