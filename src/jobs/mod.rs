pub mod scrape_schedule;
