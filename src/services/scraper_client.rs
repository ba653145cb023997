//! Client for the external scraper worker
//!
//! The worker owns the actual page scraping; this side only tells it which
//! URL to scrape. Results come back asynchronously through the
//! scrape-result callback endpoint.

use reqwest::Client;

use crate::models::scrape::ScrapeRequest;

/// Default price-monitoring page the scheduled job targets.
pub const DEFAULT_MONITORING_URL: &str = "https://www.da.gov.ph/price-monitoring/";

#[derive(Clone)]
pub struct ScraperClient {
    client: Client,
    base_url: String,
}

impl ScraperClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Dispatches a scrape request for the given target URL to the worker.
    pub async fn trigger_scrape(
        &self,
        target_url: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let request = ScrapeRequest {
            url: target_url.to_string(),
        };

        tracing::info!("dispatching scrape request for URL: {}", target_url);

        let response = self
            .client
            .post(format!("{}/scrape", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(format!("scraper worker returned {}", response.status()).into());
        }

        Ok(())
    }
}
