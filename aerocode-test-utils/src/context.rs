//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! Holds an in-memory SQLite database and a session backed by a memory store, which is
//! everything a controller or service needs to run inside a test.

use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test environment created by `TestBuilder::build()`
///
/// ```ignore
/// let mut test = TestBuilder::new().with_tables().build().await?;
///
/// let engineer = test.user().insert_user("maria", UserLevel::Engineer).await?;
/// let aircraft = test.aircraft().insert_aircraft("A-100", &[engineer.id]).await?;
///
/// let state: AppState = test.to_app_state();
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session not yet tied to any user
    pub session: Session,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// Lets integration tests build the application state without the test utilities
    /// depending on the main crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Replace the session with a fresh, empty one
    ///
    /// Used by tests that act as several users in turn.
    pub fn new_session(&mut self) {
        self.session = Session::new(None, Arc::new(MemoryStore::default()), None);
    }
}

impl TestContext {
    /// Create a context with an empty in-memory database and a new session.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, session })
    }

    /// Execute CREATE TABLE statements in order.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
