use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use sea_orm::{EntityTrait, QueryOrder};

use crate::AppState;
use crate::entities::market_locations;
use crate::entities::prelude::*;
use crate::models::common::ErrorResponse;

/// GET /api/v1/markets
pub async fn list_markets(
    State(state): State<AppState>,
) -> Result<Json<Vec<market_locations::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let markets = MarketLocations::find()
        .order_by_asc(market_locations::Column::Name)
        .all(&state.db)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Database error: {}", e),
                }),
            )
        })?;

    Ok(Json(markets))
}
