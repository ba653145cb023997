//! Wire shapes exchanged with the external scraper worker

use serde::{Deserialize, Serialize};

/// Request dispatched to the scraper worker to start a scrape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeRequest {
    pub url: String,
}

/// One finished scrape run as delivered by the worker.
///
/// Delivery is at-least-once; the ingestion pipeline deduplicates by
/// `date_processed`. Every list/optional field tolerates absence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeResult {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub date_processed: String,
    #[serde(rename = "original_url", default)]
    pub url: Option<String>,
    #[serde(default)]
    pub covered_markets: Vec<String>,
    #[serde(default)]
    pub price_data: Vec<ScrapedItem>,
}

/// One commodity row from the scraped price table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedItem {
    pub category: String,
    pub commodity: String,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    pub price: f64,
}
