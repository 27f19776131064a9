pub mod header;
pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::results::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/header", get(header::header_handler))
        // Results panel
        .route("/api/v1/results", get(handlers::handle_get_results))
        .route("/api/v1/results/render", post(handlers::handle_render))
        .route(
            "/api/v1/results/preview",
            post(handlers::handle_choose_preview).delete(handlers::handle_close_preview),
        )
        // Host signals
        .route("/api/v1/search", post(handlers::handle_search))
        .route("/api/v1/database", put(handlers::handle_set_database))
        .with_state(state)
}
