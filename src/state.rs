//! Shared application state for all routes.

use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    /// Process-wide pool; each operation holds a connection for one statement.
    pub pool: PgPool,
}
