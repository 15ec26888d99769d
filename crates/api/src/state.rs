use std::sync::Arc;

use cinetrack_db::repositories::WatchlistStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used by the health check.
    pub pool: cinetrack_db::DbPool,
    /// Watchlist storage backing the `/watchlist` handlers.
    ///
    /// Held as a trait object so tests can swap in a non-database
    /// implementation.
    pub store: Arc<dyn WatchlistStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
