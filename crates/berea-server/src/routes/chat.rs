//! Chat routes — the Q&A pipeline plus session management.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use berea_chat::{ChatMessage, ChatSession};
use berea_verse::Translation;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/chat", post(chat))
        .route(
            "/chat/sessions/{id}",
            get(get_session).delete(delete_session),
        )
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default, rename = "sessionId")]
    pub session_id: Option<Uuid>,
    pub message: String,
    pub translation: Option<Translation>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    #[serde(rename = "sessionId")]
    pub session_id: Uuid,
    pub reply: String,
    pub history: Vec<ChatMessage>,
}

async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let translation = req.translation.unwrap_or_else(|| state.default_translation());

    // Run the pipeline before touching the session map: the lock is never
    // held across an await.
    let reply = berea_chat::answer_question(&state.source, &req.message, translation).await;

    let mut sessions = state.sessions.write();
    let id = req.session_id.unwrap_or_else(Uuid::new_v4);
    let session = sessions.entry(id).or_insert_with(|| ChatSession::with_id(id));
    session.push_user(req.message.as_str());
    session.push_assistant(reply.as_str());

    Json(ChatResponse {
        session_id: id,
        reply,
        history: session.history.clone(),
    })
}

async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let sessions = state.sessions.read();
    match sessions.get(&id) {
        Some(session) => Json(session.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "unknown session" })),
        )
            .into_response(),
    }
}

async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let removed = state.sessions.write().remove(&id).is_some();
    if removed {
        Json(serde_json::json!({ "deleted": true })).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "unknown session" })),
        )
            .into_response()
    }
}
