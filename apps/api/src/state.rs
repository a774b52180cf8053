use std::sync::Arc;

use crate::config::Config;
use crate::review::engine::ReviewEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only after startup; no locking needed.
    pub engine: Arc<ReviewEngine>,
}
