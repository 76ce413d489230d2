//! Landing page.

use axum::response::{Html, IntoResponse};

/// Handler: GET /
pub async fn home() -> impl IntoResponse {
    Html(include_str!("../../static/index.html"))
}
