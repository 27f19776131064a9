//! Axum route handlers for the results panel.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::search::{PreviewLink, SearchResult};
use crate::results::panel::{render_results, ResultsView};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// Inputs of the pure render function. Missing fields default to absent/false.
#[derive(Debug, Default, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub search_result: Option<SearchResult>,
    #[serde(default)]
    pub is_searching: bool,
    #[serde(default)]
    pub database_ready: bool,
    #[serde(default)]
    pub selected_preview: Option<PreviewLink>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQueryRequest {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseStatusRequest {
    pub ready: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/results/render
///
/// Stateless: renders exactly the inputs given, without touching the session.
pub async fn handle_render(Json(req): Json<RenderRequest>) -> Json<ResultsView> {
    Json(render_results(
        req.search_result.as_ref(),
        req.is_searching,
        req.database_ready,
        req.selected_preview.as_ref(),
    ))
}

/// GET /api/v1/results
pub async fn handle_get_results(State(state): State<AppState>) -> Json<ResultsView> {
    Json(state.session.lock().await.render())
}

/// POST /api/v1/search
///
/// Forwards the query to the search service. The session shows `loading`
/// while the call is in flight, including if this request is cancelled
/// before the call returns; a failure keeps the previous result.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(req): Json<SearchQueryRequest>,
) -> Result<Json<ResultsView>, AppError> {
    let query = req.query.trim();
    if query.is_empty() {
        return Err(AppError::Validation("query cannot be empty".to_string()));
    }

    info!("Searching resumes: {query}");
    // Dropped with this future if the client goes away mid-search.
    let ticket = state.session.lock().await.begin_search();

    let outcome = state.search.search(query).await;

    let mut session = state.session.lock().await;
    match outcome {
        Ok(result) => {
            session.finish_search(ticket, result);
            Ok(Json(session.render()))
        }
        Err(e) => {
            session.fail_search(ticket);
            Err(e)
        }
    }
}

/// PUT /api/v1/database
pub async fn handle_set_database(
    State(state): State<AppState>,
    Json(req): Json<DatabaseStatusRequest>,
) -> Json<ResultsView> {
    let mut session = state.session.lock().await;
    session.set_database_ready(req.ready);
    Json(session.render())
}

/// POST /api/v1/results/preview
pub async fn handle_choose_preview(
    State(state): State<AppState>,
    Json(link): Json<PreviewLink>,
) -> Json<ResultsView> {
    let mut session = state.session.lock().await;
    session.choose_preview(link);
    Json(session.render())
}

/// DELETE /api/v1/results/preview
pub async fn handle_close_preview(State(state): State<AppState>) -> Json<ResultsView> {
    let mut session = state.session.lock().await;
    session.close_preview();
    Json(session.render())
}
