mod common;

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, EntityTrait};

use palengke_backend::entities::prelude::*;
use palengke_backend::models::analytics::Volatility;
use palengke_backend::models::scrape::ScrapedItem;
use palengke_backend::services::{analytics, ingestion};

use crate::common::{item, scrape_result, setup_test_db};

/// Ingests one scrape result per day, `offset` days back from today.
async fn ingest_day(db: &DatabaseConnection, offset: i64, markets: &[&str], items: Vec<ScrapedItem>) {
    let date = Utc::now().date_naive() - Duration::days(offset);
    let result = scrape_result(&date.to_string(), markets, items);
    ingestion::process_scrape_result(db, &result).await.unwrap();
}

#[tokio::test]
async fn test_market_scoped_stats_and_high_volatility() {
    let db = setup_test_db().await.unwrap();

    ingest_day(&db, 3, &["Balintawak Market"], vec![item("FISH", "Bangus", "Dagupan", 180.0)]).await;
    ingest_day(&db, 2, &["Balintawak Market"], vec![item("FISH", "Bangus", "Dagupan", 220.0)]).await;
    ingest_day(&db, 1, &["Balintawak Market"], vec![item("FISH", "Bangus", "Dagupan", 200.0)]).await;

    let market = MarketLocations::find().one(&db).await.unwrap().unwrap();

    let response = analytics::get_product_analytics(&db, "Bangus", Some(market.id), 30)
        .await
        .unwrap();

    assert_eq!(response.market_name, "Balintawak Market");
    assert_eq!(response.min_price, 180.0);
    assert_eq!(response.max_price, 220.0);
    assert_eq!(response.average_price, 200.0);
    // (220 - 180) / 200 = 20% fluctuation
    assert_eq!(response.volatility, Volatility::High);

    assert_eq!(response.history.len(), 3);
    assert!(response.history.windows(2).all(|w| w[0].date <= w[1].date));
    assert_eq!(response.history[0].price, 180.0);
    assert_eq!(response.history[2].price, 200.0);
}

#[tokio::test]
async fn test_national_average_spans_all_markets() {
    let db = setup_test_db().await.unwrap();

    let markets = &["Balintawak Market", "Commonwealth Market"];
    ingest_day(&db, 2, markets, vec![item("FISH", "Bangus", "Dagupan", 100.0)]).await;
    ingest_day(&db, 1, markets, vec![item("FISH", "Bangus", "Dagupan", 110.0)]).await;

    let response = analytics::get_product_analytics(&db, "Bangus", None, 30)
        .await
        .unwrap();

    assert_eq!(response.market_name, "National Average");
    // One averaged point per report date, not one per record
    assert_eq!(response.history.len(), 2);
    assert_eq!(response.history[0].price, 100.0);
    assert_eq!(response.history[1].price, 110.0);

    assert_eq!(response.min_price, 100.0);
    assert_eq!(response.max_price, 110.0);
    assert_eq!(response.average_price, 105.0);
    assert_eq!(response.volatility, Volatility::Medium);
}

#[tokio::test]
async fn test_volatility_buckets_from_ingested_series() {
    let db = setup_test_db().await.unwrap();

    let market = &["Balintawak Market"];
    ingest_day(&db, 3, market, vec![
        item("FISH", "Galunggong", "Navotas", 100.0),
        item("VEGETABLES", "Kamatis", "Batangas", 100.0),
    ])
    .await;
    ingest_day(&db, 2, market, vec![
        item("FISH", "Galunggong", "Navotas", 110.0),
        item("VEGETABLES", "Kamatis", "Batangas", 104.0),
    ])
    .await;
    ingest_day(&db, 1, market, vec![
        item("FISH", "Galunggong", "Navotas", 105.0),
        item("VEGETABLES", "Kamatis", "Batangas", 102.0),
    ])
    .await;

    // (110 - 100) / 105 ≈ 9.52%
    let medium = analytics::get_product_analytics(&db, "Galunggong", None, 30)
        .await
        .unwrap();
    assert_eq!(medium.average_price, 105.0);
    assert_eq!(medium.volatility, Volatility::Medium);

    // (104 - 100) / 102 ≈ 3.92%
    let low = analytics::get_product_analytics(&db, "Kamatis", None, 30)
        .await
        .unwrap();
    assert_eq!(low.average_price, 102.0);
    assert_eq!(low.volatility, Volatility::Low);
}

#[tokio::test]
async fn test_unknown_market_id_labels_and_zeroes() {
    let db = setup_test_db().await.unwrap();

    ingest_day(&db, 1, &["Balintawak Market"], vec![item("FISH", "Bangus", "Dagupan", 180.0)]).await;

    let response = analytics::get_product_analytics(&db, "Bangus", Some(9999), 30)
        .await
        .unwrap();

    assert_eq!(response.market_name, "Unknown Market");
    assert_eq!(response.min_price, 0.0);
    assert_eq!(response.max_price, 0.0);
    assert_eq!(response.average_price, 0.0);
    assert_eq!(response.volatility, Volatility::Low);
    assert!(response.history.is_empty());
}

#[tokio::test]
async fn test_unknown_product_defaults_to_zero_stats() {
    let db = setup_test_db().await.unwrap();

    ingest_day(&db, 1, &["Balintawak Market"], vec![item("FISH", "Bangus", "Dagupan", 180.0)]).await;

    let response = analytics::get_product_analytics(&db, "Lapu-Lapu", None, 30)
        .await
        .unwrap();

    assert_eq!(response.min_price, 0.0);
    assert_eq!(response.max_price, 0.0);
    assert_eq!(response.average_price, 0.0);
    assert_eq!(response.volatility, Volatility::Low);
    assert!(response.history.is_empty());
}

#[tokio::test]
async fn test_window_excludes_reports_older_than_lookback() {
    let db = setup_test_db().await.unwrap();

    ingest_day(&db, 40, &["Balintawak Market"], vec![item("FISH", "Bangus", "Dagupan", 999.0)]).await;
    ingest_day(&db, 1, &["Balintawak Market"], vec![item("FISH", "Bangus", "Dagupan", 100.0)]).await;

    let response = analytics::get_product_analytics(&db, "Bangus", None, 30)
        .await
        .unwrap();

    assert_eq!(response.history.len(), 1);
    assert_eq!(response.min_price, 100.0);
    assert_eq!(response.max_price, 100.0);
    assert_eq!(response.average_price, 100.0);
}

#[tokio::test]
async fn test_zero_priced_series_is_low_volatility() {
    let db = setup_test_db().await.unwrap();

    ingest_day(&db, 1, &["Balintawak Market"], vec![item("FISH", "Bangus", "Dagupan", 0.0)]).await;

    let response = analytics::get_product_analytics(&db, "Bangus", None, 30)
        .await
        .unwrap();

    assert_eq!(response.average_price, 0.0);
    assert_eq!(response.volatility, Volatility::Low);
}
