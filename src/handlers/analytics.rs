use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::AppState;
use crate::models::analytics::{ProductAnalyticsQuery, ProductAnalyticsResponse};
use crate::models::common::ErrorResponse;
use crate::services::analytics;

const DEFAULT_WINDOW_DAYS: i64 = 30;

/// GET /api/v1/analytics/product
///
/// With `market_id` the stats are scoped to that market; without it the
/// response is the national average across all markets. `days` bounds the
/// lookback window (default 30).
pub async fn get_product_analytics(
    State(state): State<AppState>,
    Query(params): Query<ProductAnalyticsQuery>,
) -> Result<Json<ProductAnalyticsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let days = params.days.unwrap_or(DEFAULT_WINDOW_DAYS);

    let response = analytics::get_product_analytics(
        &state.db,
        &params.product_name,
        params.market_id,
        days,
    )
    .await
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Database error: {}", e),
            }),
        )
    })?;

    Ok(Json(response))
}
