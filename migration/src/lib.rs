pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_client_storage;

pub struct StorageMigrator;

#[async_trait::async_trait]
impl MigratorTrait for StorageMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_client_storage::Migration),
        ]
    }
}
