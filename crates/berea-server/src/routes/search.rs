//! Keyword search over the fixed verse table.

use std::sync::Arc;

use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use berea_search::{extract_keywords, keyword_search};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/search", get(search))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

async fn search(Query(query): Query<SearchQuery>) -> Json<serde_json::Value> {
    let keywords = extract_keywords(&query.q);
    let results = keyword_search(&query.q);
    let total = results.len();

    Json(serde_json::json!({
        "query": query.q,
        "keywords": keywords,
        "results": results,
        "total": total,
    }))
}
