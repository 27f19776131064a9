use axum::Json;

use crate::header::HeaderView;

/// GET /api/v1/header
pub async fn header_handler() -> Json<HeaderView> {
    Json(HeaderView::default())
}
