//! Declarative setup of the test environment.
//!
//! Configuration is queued on the builder and applied in `build()`: tables are created
//! first, then any queued fixtures are inserted.

use entity::sea_orm_active_enums::UserLevel;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{constant::TEST_ADMIN_USERNAME, error::TestError, TestContext};

/// Builder for a [`TestContext`].
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_app_tables: bool,
    include_admin_master: bool,
}

impl TestBuilder {
    /// Create a builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_app_tables: false,
            include_admin_master: false,
        }
    }

    /// Create every application table.
    ///
    /// Tables are created in foreign key order: users, aircraft, engineer links, tasks,
    /// task responsibles, parts, and test records.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_tables(mut self) -> Self {
        self.include_app_tables = true;
        self
    }

    /// Create the table of a single entity.
    ///
    /// Chain multiple calls to add multiple tables, parents before children.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert the admin master account, which receives ID 1.
    ///
    /// Must be queued before any other user is inserted so that it owns the first ID.
    pub fn with_admin_master(mut self) -> Self {
        self.include_admin_master = true;
        self
    }

    /// Build the context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::PasswordHashError)` - Hashing a fixture password failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_app_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Aircraft),
                schema.create_table_from_entity(entity::prelude::AircraftEngineer),
                schema.create_table_from_entity(entity::prelude::Task),
                schema.create_table_from_entity(entity::prelude::TaskResponsible),
                schema.create_table_from_entity(entity::prelude::Part),
                schema.create_table_from_entity(entity::prelude::TestRecord),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        if self.include_admin_master {
            context
                .user()
                .insert_user_with_name("Administrador", TEST_ADMIN_USERNAME, UserLevel::Administrator)
                .await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
