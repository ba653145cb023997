//! Broadcasting one reported price across every market it covers
//!
//! The source publishes one prevailing price per commodity for a whole
//! covered region. This is the single place where that one-to-many
//! duplication happens: one observation row per market, written in one
//! bulk insert.

use chrono::Utc;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, Set};

use crate::entities::prelude::*;
use crate::entities::{daily_price_records, market_locations, price_reports, products};
use crate::models::scrape::ScrapedItem;

/// Writes one price observation per resolved market, linking the item's
/// price/unit/origin to the report, product, and market by id. Returns the
/// number of rows written; an empty market list writes nothing.
pub async fn create_records_for_all_markets<C: ConnectionTrait>(
    conn: &C,
    item: &ScrapedItem,
    product: &products::Model,
    report: &price_reports::Model,
    markets: &[market_locations::Model],
) -> Result<u64, DbErr> {
    if markets.is_empty() {
        tracing::debug!("no markets to broadcast for product: {}", item.commodity);
        return Ok(0);
    }

    let now = Utc::now().naive_utc();

    let batch: Vec<daily_price_records::ActiveModel> = markets
        .iter()
        .map(|market| daily_price_records::ActiveModel {
            price: Set(item.price),
            unit: Set(item.unit.clone()),
            origin: Set(item.origin.clone()),
            product_id: Set(product.id),
            report_id: Set(report.id),
            market_id: Set(market.id),
            created_at: Set(Some(now)),
            ..Default::default()
        })
        .collect();

    let written = batch.len() as u64;
    DailyPriceRecords::insert_many(batch).exec(conn).await?;

    tracing::debug!(
        "linked {} records for {} across {} markets",
        written,
        item.commodity,
        markets.len()
    );

    Ok(written)
}
