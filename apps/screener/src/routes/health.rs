use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service version and which search backend is wired in.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let search_backend = if state.config.search_api_url.is_some() {
        "http"
    } else {
        "unconfigured"
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-screener",
        "search_backend": search_backend
    }))
}
