pub use super::daily_price_records::Entity as DailyPriceRecords;
pub use super::market_locations::Entity as MarketLocations;
pub use super::price_reports::Entity as PriceReports;
pub use super::products::Entity as Products;
