//! Migrator registering the schema for the vehicle ledger.
//! Every migration uses `if_not_exists`, so running `up` on each start is safe.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_vehicles;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_vehicles::Migration)]
    }
}
