pub use sea_orm_migration::prelude::*;

mod m20250912_000001_create_user_table;
mod m20251020_000002_add_linked_accounts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250912_000001_create_user_table::Migration),
            Box::new(m20251020_000002_add_linked_accounts::Migration),
        ]
    }
}
