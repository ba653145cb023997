//! SeaORM Entity for the append-only price observation time-series
//!
//! Records reference their report, product, and market by plain foreign-key
//! columns; parents carry no back-references.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "daily_price_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub price: f64,
    pub unit: Option<String>,
    /// Provenance of the commodity as stated by the source (e.g. "Dagupan")
    pub origin: Option<String>,
    pub product_id: i32,
    pub report_id: i32,
    pub market_id: i32,
    pub created_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::ProductId",
        to = "super::products::Column::Id"
    )]
    Products,
    #[sea_orm(
        belongs_to = "super::price_reports::Entity",
        from = "Column::ReportId",
        to = "super::price_reports::Column::Id"
    )]
    PriceReports,
    #[sea_orm(
        belongs_to = "super::market_locations::Entity",
        from = "Column::MarketId",
        to = "super::market_locations::Column::Id"
    )]
    MarketLocations,
}

impl ActiveModelBehavior for ActiveModel {}
