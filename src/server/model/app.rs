use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::config::DEFAULT_PASSWORD;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Password given to new users created without one
    pub default_user_password: Arc<str>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, default_user_password: &str) -> Self {
        Self {
            db,
            default_user_password: Arc::from(default_user_password),
        }
    }
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db, DEFAULT_PASSWORD)
    }
}
