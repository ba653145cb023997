pub use sea_orm_migration::prelude::*;

mod m20260122_000001_create_price_reports;
mod m20260122_000002_create_market_locations;
mod m20260122_000003_create_products;
mod m20260122_000004_create_daily_price_records;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260122_000001_create_price_reports::Migration),
            Box::new(m20260122_000002_create_market_locations::Migration),
            Box::new(m20260122_000003_create_products::Migration),
            Box::new(m20260122_000004_create_daily_price_records::Migration),
        ]
    }
}
