//! HTTP routes for the faqbot server.

pub mod chat;
pub mod home;
pub mod uploads;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
///
/// `/templates/{filename}` and `/uploads/{filename}` serve the same upload
/// directory: matched answers embed `/uploads/...` anchors while the upload
/// endpoint historically lives under `/templates`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home))
        .route("/api/chat", post(chat::chat))
        .route("/templates", post(uploads::upload))
        .route("/templates/{filename}", get(uploads::download))
        .route("/uploads/{filename}", get(uploads::download))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
