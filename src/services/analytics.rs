//! Read-only price analytics over the observation time-series
//!
//! Computes min/max/average and a volatility bucket for one product over a
//! lookback window, either scoped to a single market or averaged
//! nationally. Works entirely off foreign-key lookups: product ids by
//! name, report ids by window, then one filtered sweep over the records.

use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::collections::{BTreeMap, HashMap};

use crate::entities::prelude::*;
use crate::entities::{daily_price_records, price_reports, products};
use crate::models::analytics::{PriceHistoryPoint, ProductAnalyticsResponse, Volatility};

pub const NATIONAL_AVERAGE_LABEL: &str = "National Average";
pub const UNKNOWN_MARKET_LABEL: &str = "Unknown Market";

/// Builds the analytics response for one product name.
///
/// With a market id the series and stats are scoped to that market; without
/// one the series is a per-date average across all markets and the stats
/// are computed nationally over the raw rows.
pub async fn get_product_analytics(
    db: &DatabaseConnection,
    product_name: &str,
    market_id: Option<i32>,
    days: i64,
) -> Result<ProductAnalyticsResponse, DbErr> {
    let start_date = Utc::now().date_naive() - Duration::days(days);

    let market_label = match market_id {
        Some(id) => MarketLocations::find_by_id(id)
            .one(db)
            .await?
            .map(|m| m.name)
            .unwrap_or_else(|| UNKNOWN_MARKET_LABEL.to_string()),
        None => NATIONAL_AVERAGE_LABEL.to_string(),
    };

    // The same commodity name can exist in more than one category; the
    // series aggregates across all of them, matching lookup by name alone
    let product_ids: Vec<i32> = Products::find()
        .filter(products::Column::ProductName.eq(product_name))
        .all(db)
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();

    let report_dates: HashMap<i32, NaiveDate> = PriceReports::find()
        .filter(price_reports::Column::DateReported.gte(start_date))
        .all(db)
        .await?
        .into_iter()
        .map(|r| (r.id, r.date_reported))
        .collect();

    let records = if product_ids.is_empty() || report_dates.is_empty() {
        vec![]
    } else {
        let mut query = DailyPriceRecords::find()
            .filter(daily_price_records::Column::ProductId.is_in(product_ids))
            .filter(
                daily_price_records::Column::ReportId
                    .is_in(report_dates.keys().copied().collect::<Vec<_>>()),
            );
        if let Some(id) = market_id {
            query = query.filter(daily_price_records::Column::MarketId.eq(id));
        }
        query.all(db).await?
    };

    let history = build_history(&records, &report_dates, market_id.is_some());

    let (min_price, max_price, average_price) = compute_stats(&records);
    let volatility = classify_volatility(min_price, max_price, average_price);

    Ok(ProductAnalyticsResponse {
        product_name: product_name.to_string(),
        market_name: market_label,
        min_price,
        max_price,
        average_price,
        volatility,
        history,
    })
}

/// One point per observation for a single market; per-date averages across
/// markets for the national series. Sorted by date ascending either way.
fn build_history(
    records: &[daily_price_records::Model],
    report_dates: &HashMap<i32, NaiveDate>,
    single_market: bool,
) -> Vec<PriceHistoryPoint> {
    if single_market {
        let mut points: Vec<PriceHistoryPoint> = records
            .iter()
            .filter_map(|r| {
                report_dates
                    .get(&r.report_id)
                    .map(|date| PriceHistoryPoint { date: *date, price: r.price })
            })
            .collect();
        points.sort_by_key(|p| p.date);
        return points;
    }

    let mut by_date: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for record in records {
        if let Some(date) = report_dates.get(&record.report_id) {
            let entry = by_date.entry(*date).or_insert((0.0, 0));
            entry.0 += record.price;
            entry.1 += 1;
        }
    }

    by_date
        .into_iter()
        .map(|(date, (sum, count))| PriceHistoryPoint {
            date,
            price: sum / count as f64,
        })
        .collect()
}

/// Min/max/average over the raw windowed rows; empty input yields zeros.
/// The average is rounded to 2 decimal places.
fn compute_stats(records: &[daily_price_records::Model]) -> (f64, f64, f64) {
    if records.is_empty() {
        return (0.0, 0.0, 0.0);
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for record in records {
        min = min.min(record.price);
        max = max.max(record.price);
        sum += record.price;
    }

    let avg = sum / records.len() as f64;
    (min, max, (avg * 100.0).round() / 100.0)
}

/// Percentage fluctuation between min and max relative to the average:
/// under 5% is Low, under 15% Medium, anything above High. A zero average
/// is Low unconditionally.
pub fn classify_volatility(min: f64, max: f64, avg: f64) -> Volatility {
    if avg == 0.0 {
        return Volatility::Low;
    }

    let fluctuation_pct = (max - min) / avg * 100.0;

    if fluctuation_pct < 5.0 {
        Volatility::Low
    } else if fluctuation_pct < 15.0 {
        Volatility::Medium
    } else {
        Volatility::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volatility_high() {
        // (220 - 180) / 200 * 100 = 20%
        assert_eq!(classify_volatility(180.0, 220.0, 200.0), Volatility::High);
    }

    #[test]
    fn test_volatility_medium() {
        // (110 - 100) / 105 * 100 = 9.52%
        assert_eq!(classify_volatility(100.0, 110.0, 105.0), Volatility::Medium);
    }

    #[test]
    fn test_volatility_low() {
        // (104 - 100) / 102 * 100 = 3.92%
        assert_eq!(classify_volatility(100.0, 104.0, 102.0), Volatility::Low);
    }

    #[test]
    fn test_volatility_zero_average_is_low() {
        assert_eq!(classify_volatility(0.0, 0.0, 0.0), Volatility::Low);
        assert_eq!(classify_volatility(10.0, 500.0, 0.0), Volatility::Low);
    }

    #[test]
    fn test_volatility_bucket_boundaries() {
        // Exactly 5% crosses into Medium, exactly 15% into High
        assert_eq!(classify_volatility(100.0, 105.0, 100.0), Volatility::Medium);
        assert_eq!(classify_volatility(100.0, 115.0, 100.0), Volatility::High);
        assert_eq!(classify_volatility(100.0, 104.9, 100.0), Volatility::Low);
    }

    #[test]
    fn test_compute_stats_rounds_average() {
        let make = |price: f64| daily_price_records::Model {
            id: 0,
            price,
            unit: None,
            origin: None,
            product_id: 1,
            report_id: 1,
            market_id: 1,
            created_at: None,
        };
        let records = vec![make(100.0), make(101.0), make(101.0)];
        let (min, max, avg) = compute_stats(&records);
        assert_eq!(min, 100.0);
        assert_eq!(max, 101.0);
        assert_eq!(avg, 100.67);
    }

    #[test]
    fn test_compute_stats_empty_defaults_to_zero() {
        assert_eq!(compute_stats(&[]), (0.0, 0.0, 0.0));
    }
}
