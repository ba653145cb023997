use tokio::time::{Duration, interval};

use crate::services::scraper_client::{DEFAULT_MONITORING_URL, ScraperClient};

/// Spawns the daily scrape trigger. The worker delivers results back
/// through the scrape-result callback route, so a failed dispatch only
/// costs one day's run and the loop keeps going.
pub async fn start_scrape_schedule_job(scraper: ScraperClient) {
    tokio::spawn(async move {
        let mut interval = interval(Duration::from_secs(86_400)); // Every 24 hours

        // The first tick resolves immediately; consume it so startup does
        // not fire an extra scrape
        interval.tick().await;

        loop {
            interval.tick().await;
            tracing::info!("starting scheduled scrape trigger");

            if let Err(e) = scraper.trigger_scrape(DEFAULT_MONITORING_URL).await {
                tracing::error!("failed to dispatch scheduled scrape: {}", e);
            }
        }
    });
}
