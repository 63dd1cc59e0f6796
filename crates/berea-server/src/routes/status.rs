//! Service status and the fixed translation list.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use berea_verse::Translation;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/status", get(get_status))
        .route("/translations", get(get_translations))
}

async fn get_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "berea",
        "apiBase": state.config.api_base,
        "defaultTranslation": state.default_translation().code(),
        "timeoutSecs": state.config.timeout_secs,
        "activeSessions": state.sessions.read().len(),
    }))
}

async fn get_translations() -> Json<serde_json::Value> {
    let codes: Vec<&str> = Translation::ALL.iter().map(|t| t.code()).collect();
    Json(serde_json::json!({ "translations": codes }))
}
