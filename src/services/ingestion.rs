//! Ingestion orchestration: one scrape result, one transaction
//!
//! Composes report creation, market resolution, product matching, and
//! price broadcasting into a single all-or-nothing batch. A duplicate
//! report is a successful no-op; an empty price list still commits the
//! report and markets (the source was reachable, it just had nothing to
//! say); any other failure rolls the whole run back.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Serialize;

use crate::models::scrape::ScrapeResult;
use crate::services::{market_resolver, price_broadcaster, product_matcher, report_processing};

/// What one ingestion run did, for callers and logs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum IngestionOutcome {
    /// A report for this date was already ingested; nothing was written.
    Skipped { date_reported: NaiveDate },
    Ingested {
        report_id: i32,
        products_processed: usize,
        records_written: u64,
    },
}

/// Processes one scrape result end to end.
pub async fn process_scrape_result(
    db: &DatabaseConnection,
    result: &ScrapeResult,
) -> Result<IngestionOutcome, Box<dyn std::error::Error + Send + Sync>> {
    if report_processing::report_exists(db, &result.date_processed).await? {
        let date_reported = report_processing::parse_report_date(&result.date_processed);
        tracing::info!(
            "report already exists for date {}, skipping to prevent duplication",
            date_reported
        );
        return Ok(IngestionOutcome::Skipped { date_reported });
    }

    let txn = db.begin().await?;

    let report = report_processing::create_from_scrape_result(&txn, result).await?;
    let markets = market_resolver::find_or_create_markets(&txn, &result.covered_markets).await?;

    if result.price_data.is_empty() {
        // An empty price list is still evidence the source was reachable:
        // keep the report header and any resolved markets
        tracing::info!(
            "no price data in scrape result; keeping report {} and {} markets",
            report.id,
            markets.len()
        );
        txn.commit().await?;
        return Ok(IngestionOutcome::Ingested {
            report_id: report.id,
            products_processed: 0,
            records_written: 0,
        });
    }

    let mut records_written: u64 = 0;

    for (i, item) in result.price_data.iter().enumerate() {
        tracing::debug!("processing product {}: {}", i + 1, item.commodity);

        let product = product_matcher::find_or_create_product(&txn, item).await?;

        records_written += price_broadcaster::create_records_for_all_markets(
            &txn, item, &product, &report, &markets,
        )
        .await?;
    }

    txn.commit().await?;

    tracing::info!(
        "batch complete: report {}, {} products processed, {} price rows saved",
        report.id,
        result.price_data.len(),
        records_written
    );

    Ok(IngestionOutcome::Ingested {
        report_id: report.id,
        products_processed: result.price_data.len(),
        records_written,
    })
}
