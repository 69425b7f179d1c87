pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_user_table;
mod m20251101_000002_create_aircraft_table;
mod m20251101_000003_create_aircraft_engineer_table;
mod m20251101_000004_create_task_table;
mod m20251101_000005_create_task_responsible_table;
mod m20251101_000006_create_part_table;
mod m20251101_000007_create_test_record_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_user_table::Migration),
            Box::new(m20251101_000002_create_aircraft_table::Migration),
            Box::new(m20251101_000003_create_aircraft_engineer_table::Migration),
            Box::new(m20251101_000004_create_task_table::Migration),
            Box::new(m20251101_000005_create_task_responsible_table::Migration),
            Box::new(m20251101_000006_create_part_table::Migration),
            Box::new(m20251101_000007_create_test_record_table::Migration),
        ]
    }
}
