//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared resources handed to every handler through Axum's state extraction.
///
/// Cloning is cheap: `DatabaseConnection` is a pool handle and clones share it.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool backing every repository.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
