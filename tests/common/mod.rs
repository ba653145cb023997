use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use palengke_backend::models::scrape::{ScrapeResult, ScrapedItem};

/// Set up a fresh test database with the full schema applied.
/// Uses TEST_DATABASE_URL if set, otherwise an in-memory SQLite database.
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let database_url =
        std::env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());

    // A single connection keeps the in-memory schema alive for the whole test
    let mut options = ConnectOptions::new(database_url);
    options.max_connections(1);

    let db = Database::connect(options).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

#[allow(dead_code)]
pub fn scrape_result(date: &str, markets: &[&str], price_data: Vec<ScrapedItem>) -> ScrapeResult {
    ScrapeResult {
        status: Some("success".to_string()),
        date_processed: date.to_string(),
        url: Some("https://example.com/report".to_string()),
        covered_markets: markets.iter().map(|m| m.to_string()).collect(),
        price_data,
    }
}

#[allow(dead_code)]
pub fn item(category: &str, commodity: &str, origin: &str, price: f64) -> ScrapedItem {
    ScrapedItem {
        category: category.to_string(),
        commodity: commodity.to_string(),
        origin: Some(origin.to_string()),
        unit: Some("kg".to_string()),
        price,
    }
}
