use sqlx::PgPool;

use crate::assistant::orchestrator::Orchestrator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Assistant workflows; owns the completion client constructed in `main`.
    pub assistant: Orchestrator,
}
