use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::AppState;
use crate::models::common::ErrorResponse;
use crate::models::scrape::ScrapeResult;
use crate::services::ingestion::{self, IngestionOutcome};
use crate::services::scraper_client::DEFAULT_MONITORING_URL;

#[derive(Serialize)]
pub struct TriggerResponse {
    pub message: String,
}

/// POST /api/v1/scrape/trigger
///
/// Dispatches a scrape of the price-monitoring page to the worker and
/// returns immediately; the result arrives later on the callback route.
pub async fn trigger_scrape(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<TriggerResponse>), (StatusCode, Json<ErrorResponse>)> {
    state
        .scraper
        .trigger_scrape(DEFAULT_MONITORING_URL)
        .await
        .map_err(|e| {
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: format!("Failed to dispatch scrape request: {}", e),
                }),
            )
        })?;

    Ok((
        StatusCode::ACCEPTED,
        Json(TriggerResponse {
            message: "Scraping request has been dispatched to the scraper worker.".to_string(),
        }),
    ))
}

/// POST /api/v1/scrape/result
///
/// Callback route the scraper worker delivers finished runs to. Delivery
/// is at-least-once; a redelivered date comes back as a skipped outcome.
pub async fn receive_scrape_result(
    State(state): State<AppState>,
    Json(result): Json<ScrapeResult>,
) -> Result<Json<IngestionOutcome>, (StatusCode, Json<ErrorResponse>)> {
    tracing::info!(
        "received scrape result for date {} ({} markets, {} items)",
        result.date_processed,
        result.covered_markets.len(),
        result.price_data.len()
    );

    let outcome = ingestion::process_scrape_result(&state.db, &result)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Ingestion failed: {}", e),
                }),
            )
        })?;

    Ok(Json(outcome))
}
