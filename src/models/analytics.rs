//! Response shapes for the price analytics surface

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ProductAnalyticsQuery {
    pub product_name: String,
    pub market_id: Option<i32>,
    /// Lookback window in days, defaults to 30
    pub days: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryPoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// Three-bucket classification of (max - min) / avg over the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Volatility {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductAnalyticsResponse {
    pub product_name: String,
    /// Market name, "Unknown Market", or "National Average"
    pub market_name: String,
    pub min_price: f64,
    pub max_price: f64,
    pub average_price: f64,
    pub volatility: Volatility,
    pub history: Vec<PriceHistoryPoint>,
}
