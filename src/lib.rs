// src/lib.rs

use axum::{
    Router,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use services::scraper_client::ScraperClient;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub scraper: ScraperClient,
}

pub mod entities {
    pub mod prelude;

    pub mod daily_price_records;
    pub mod market_locations;
    pub mod price_reports;
    pub mod products;
}

pub mod services {
    pub mod analytics;
    pub mod ingestion;
    pub mod market_resolver;
    pub mod price_broadcaster;
    pub mod product_matcher;
    pub mod report_processing;
    pub mod scraper_client;
}

pub mod handlers;
pub mod jobs;
pub mod models;

/// Full API surface; shared between the server binary and handler tests.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/v1/analytics/product",
            get(handlers::analytics::get_product_analytics),
        )
        .route("/api/v1/scrape/trigger", post(handlers::scrape::trigger_scrape))
        .route(
            "/api/v1/scrape/result",
            post(handlers::scrape::receive_scrape_result),
        )
        .route("/api/v1/markets", get(handlers::market::list_markets))
        .route("/api/v1/products", get(handlers::product::list_products))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
