//! Bulk find-or-create of market identity
//!
//! The scraper reports markets by name only. Resolution stays at a constant
//! number of bulk queries no matter how many names arrive: one `IN` read
//! for the whole set, one bulk insert for the missing names, one re-read to
//! pick up the generated ids.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Set};
use std::collections::HashSet;

use chrono::Utc;

use crate::entities::market_locations::{self, MarketStatus};
use crate::entities::prelude::*;

/// Resolves every name in `covered_markets` to a persisted market row,
/// creating missing ones as ACTIVE with kind and coordinates unset.
/// Returns the union of pre-existing and newly created rows.
pub async fn find_or_create_markets<C: ConnectionTrait>(
    conn: &C,
    covered_markets: &[String],
) -> Result<Vec<market_locations::Model>, DbErr> {
    if covered_markets.is_empty() {
        return Ok(vec![]);
    }

    // Trim whitespace and collapse duplicates before touching the database
    let unique_names = unique_trimmed(covered_markets);
    if unique_names.is_empty() {
        return Ok(vec![]);
    }

    let existing = MarketLocations::find()
        .filter(market_locations::Column::Name.is_in(unique_names.clone()))
        .all(conn)
        .await?;

    let existing_names: HashSet<&str> = existing.iter().map(|m| m.name.as_str()).collect();

    let new_markets: Vec<market_locations::ActiveModel> = unique_names
        .iter()
        .filter(|name| !existing_names.contains(name.as_str()))
        .map(|name| market_locations::ActiveModel {
            name: Set(name.clone()),
            status: Set(MarketStatus::Active),
            created_at: Set(Some(Utc::now().naive_utc())),
            ..Default::default()
        })
        .collect();

    if new_markets.is_empty() {
        return Ok(existing);
    }

    let created = new_markets.len();
    MarketLocations::insert_many(new_markets).exec(conn).await?;

    // Re-read the whole set so callers get database-assigned ids for the
    // new rows alongside the pre-existing ones
    let resolved = MarketLocations::find()
        .filter(market_locations::Column::Name.is_in(unique_names))
        .all(conn)
        .await?;

    tracing::debug!(
        "resolved {} markets ({} newly created)",
        resolved.len(),
        created
    );

    Ok(resolved)
}

/// Trims every name and collapses duplicates; names that trim to empty are
/// dropped.
fn unique_trimmed(names: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .filter(|n| seen.insert(n.to_string()))
        .map(|n| n.to_string())
        .collect()
}
