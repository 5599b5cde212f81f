use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The pool is the process-wide store handle: created once at startup and
/// closed explicitly after the server drains.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: bouncyball_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
