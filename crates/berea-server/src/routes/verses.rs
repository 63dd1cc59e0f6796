//! Verse lookup — resolve a reference and attach its cross-references.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use berea_study::cross_references;
use berea_verse::{Translation, VerseReference, VerseSource};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/verses/{book}/{chapter}/{verse}", get(get_verse))
}

#[derive(Debug, Deserialize)]
pub struct VerseQuery {
    pub translation: Option<Translation>,
    /// When present, the resolved verse is remembered as the session's
    /// current verse.
    #[serde(default, rename = "sessionId")]
    pub session_id: Option<Uuid>,
}

async fn get_verse(
    State(state): State<Arc<AppState>>,
    Path((book, chapter, verse)): Path<(String, String, String)>,
    Query(query): Query<VerseQuery>,
) -> impl IntoResponse {
    let raw = format!("{} {}:{}", book, chapter, verse);
    let reference = match VerseReference::parse(&raw) {
        Ok(r) => r,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response();
        }
    };

    let translation = query.translation.unwrap_or_else(|| state.default_translation());

    match state.source.resolve(&reference, translation).await {
        Ok(resolved) => {
            let refs = cross_references(&reference.to_string());

            if let Some(id) = query.session_id {
                if let Some(session) = state.sessions.write().get_mut(&id) {
                    session.current_verse = Some(resolved.clone());
                }
            }

            Json(serde_json::json!({
                "verse": resolved,
                "crossReferences": refs,
            }))
            .into_response()
        }
        Err(e) => {
            debug!("lookup failed for {}: {}", reference, e);
            (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({
                    "error": "Verse not found. Please check the reference.",
                })),
            )
                .into_response()
        }
    }
}
