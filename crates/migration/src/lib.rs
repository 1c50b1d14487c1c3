pub use sea_orm_migration::prelude::*;

mod m20260301_000001_localization;
mod m20260301_000002_access;
mod m20260301_000003_organization;
mod m20260301_000004_accounting;
mod m20260301_000005_staffing;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_localization::Migration),
            Box::new(m20260301_000002_access::Migration),
            Box::new(m20260301_000003_organization::Migration),
            Box::new(m20260301_000004_accounting::Migration),
            Box::new(m20260301_000005_staffing::Migration),
        ]
    }
}
