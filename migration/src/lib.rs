pub use sea_orm_migration::prelude::*;

mod m20250712_101500_create_contacts_table;
mod m20250712_101630_create_downloads_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250712_101500_create_contacts_table::Migration),
            Box::new(m20250712_101630_create_downloads_table::Migration),
        ]
    }
}
