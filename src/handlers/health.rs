use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

pub async fn index() -> &'static str {
    "Welcome to the Healthcare Chatbot"
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub catalog_loaded: bool,
    pub hospitals: usize,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        catalog_loaded: state.catalog.is_loaded(),
        hospitals: state.catalog.len(),
    })
}
