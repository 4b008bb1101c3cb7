use sqlx::SqlitePool;

use crate::generation::engine::ContentEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Stateless; provider settings are fixed at construction.
    pub engine: ContentEngine,
}
