//! HTTP route handlers.

pub mod chat;
pub mod plans;
pub mod search;
pub mod status;
pub mod verses;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(chat::routes())
        .merge(verses::routes())
        .merge(search::routes())
        .merge(plans::routes())
        .merge(status::routes())
}
