use std::sync::Arc;

use crate::storage::Storage;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway. Postgres in production, in-memory without `DATABASE_URL`.
    pub store: Arc<dyn Storage>,
}
