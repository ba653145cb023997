//! Seeds a deterministic demo dataset by replaying a fixed wet-market
//! catalog through the real ingestion pipeline.
//!
//! Runs only against an empty database (skips itself if any market
//! exists). Prices jitter around each commodity's base price with a
//! seeded RNG, so repeated runs on a fresh database produce identical
//! rows. Never wired into the server binary.

use chrono::{Duration, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sea_orm::{ActiveModelTrait, Database, EntityTrait, PaginatorTrait, Set};
use sea_orm_migration::MigratorTrait;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palengke_backend::entities::market_locations::{self, MarketKind};
use palengke_backend::entities::prelude::*;
use palengke_backend::models::scrape::{ScrapeResult, ScrapedItem};
use palengke_backend::services::ingestion;
use palengke_backend::services::scraper_client::DEFAULT_MONITORING_URL;

const RNG_SEED: u64 = 20260122;
const HISTORY_DAYS: i64 = 30;

const MARKETS: &[&str] = &[
    "Commonwealth Market",
    "Balintawak Market",
    "Farmers Market Cubao (Muñoz)",
    "Nepa Q-Mart",
    "Marikina Public Market",
    "Hi-Top Supermarket",
];

// (category, commodity, origin, unit, base price in PHP)
const CATALOG: &[(&str, &str, &str, &str, f64)] = &[
    ("FISH", "Bangus", "Dagupan", "kg", 180.0),
    ("FISH", "Galunggong", "Navotas", "kg", 220.0),
    ("FISH", "Tilapia", "Taal", "kg", 130.0),
    ("MEAT", "Pork Liempo", "Local", "kg", 300.0),
    ("MEAT", "Whole Chicken", "Local", "kg", 185.0),
    ("VEGETABLES", "Kamatis", "Batangas", "kg", 60.0),
    ("VEGETABLES", "Sitaw", "Laguna", "kg", 80.0),
    ("VEGETABLES", "Talong", "Batangas", "kg", 70.0),
    ("RICE", "Well Milled Rice", "Nueva Ecija", "kg", 48.0),
    ("RICE", "Regular Milled Rice", "Nueva Ecija", "kg", 42.0),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let db = Database::connect(&database_url).await?;
    migration::Migrator::up(&db, None).await?;

    if MarketLocations::find().count(&db).await? > 0 {
        tracing::info!("database already has markets, skipping demo seeding");
        return Ok(());
    }

    tracing::info!(
        "seeding {} days of demo history across {} markets",
        HISTORY_DAYS,
        MARKETS.len()
    );

    let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED);
    let covered_markets: Vec<String> = MARKETS.iter().map(|m| m.to_string()).collect();
    let today = Utc::now().date_naive();

    for offset in (1..=HISTORY_DAYS).rev() {
        let date = today - Duration::days(offset);

        let price_data: Vec<ScrapedItem> = CATALOG
            .iter()
            .map(|(category, commodity, origin, unit, base_price)| ScrapedItem {
                category: category.to_string(),
                commodity: commodity.to_string(),
                origin: Some(origin.to_string()),
                unit: Some(unit.to_string()),
                price: jitter_price(&mut rng, *base_price),
            })
            .collect();

        let result = ScrapeResult {
            status: Some("success".to_string()),
            date_processed: date.to_string(),
            url: Some(DEFAULT_MONITORING_URL.to_string()),
            covered_markets: covered_markets.clone(),
            price_data,
        };

        ingestion::process_scrape_result(&db, &result).await?;
    }

    // The resolver leaves kind unset; fill it in the way an administrator
    // would, plus a rating, so the demo data looks curated
    for market in MarketLocations::find().all(&db).await? {
        let kind = if market.name.contains("Supermarket") || market.name.contains("Mall") {
            MarketKind::Supermarket
        } else {
            MarketKind::WetMarket
        };
        let rating: f64 = 4.0 + rng.gen_range(0.0..1.0);

        let mut update: market_locations::ActiveModel = market.into();
        update.kind = Set(Some(kind));
        update.rating = Set(Some((rating * 10.0).round() / 10.0));
        update.updated_at = Set(Some(Utc::now().naive_utc()));
        update.update(&db).await?;
    }

    tracing::info!("demo seeding complete");

    Ok(())
}

/// Jitters a base price by ±10% and rounds to centavos.
fn jitter_price(rng: &mut ChaCha8Rng, base_price: f64) -> f64 {
    let price = base_price * (1.0 + rng.gen_range(-0.10..=0.10));
    (price * 100.0).round() / 100.0
}
