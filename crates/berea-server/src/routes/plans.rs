//! Study plan generation.

use std::sync::Arc;

use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use berea_study::generate_plan;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/plans", post(create_plan))
}

#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub topic: String,
    #[serde(default = "default_days")]
    pub days: usize,
}

fn default_days() -> usize {
    7
}

async fn create_plan(Json(req): Json<PlanRequest>) -> Json<serde_json::Value> {
    let days = generate_plan(&req.topic, req.days);

    Json(serde_json::json!({
        "topic": req.topic,
        "days": days,
    }))
}
