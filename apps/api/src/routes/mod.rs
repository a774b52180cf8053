pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::review::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/vocabulary", get(handlers::handle_vocabulary))
        .route("/api/v1/review", post(handlers::handle_review_pdf))
        .route("/api/v1/review/text", post(handlers::handle_review_text))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
