use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. Handlers borrow a pooled connection (or open a
/// transaction) per operation; nothing holds a connection across requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: fyyur_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
