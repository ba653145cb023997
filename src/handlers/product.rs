use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;

use crate::AppState;
use crate::entities::prelude::*;
use crate::entities::products::{self, ProductStatus};
use crate::models::common::ErrorResponse;

#[derive(Deserialize)]
pub struct ProductListQuery {
    /// Optional status filter: ACTIVE, PENDING, or INACTIVE
    pub status: Option<String>,
}

/// GET /api/v1/products
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductListQuery>,
) -> Result<Json<Vec<products::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let status_filter = match params.status.as_deref() {
        Some(raw) => Some(ProductStatus::parse(raw).ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Unknown product status: {}", raw),
                }),
            )
        })?),
        None => None,
    };

    let mut query = Products::find().order_by_asc(products::Column::ProductName);
    if let Some(status) = status_filter {
        query = query.filter(products::Column::Status.eq(status));
    }

    let product_rows = query.all(&state.db).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Database error: {}", e),
            }),
        )
    })?;

    Ok(Json(product_rows))
}
