//! SeaORM Entity for market venue identity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "market_locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Exact trimmed venue name (unique identity key)
    pub name: String,
    /// Unset when the resolver auto-creates the market from a scrape
    pub kind: Option<MarketKind>,
    pub status: MarketStatus,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub opening_time: Option<DateTime>,
    pub closing_time: Option<DateTime>,
    pub rating: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: Option<DateTime>,
    pub updated_at: Option<DateTime>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum MarketKind {
    #[sea_orm(string_value = "WET_MARKET")]
    WetMarket,
    #[sea_orm(string_value = "SUPERMARKET")]
    Supermarket,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum MarketStatus {
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "INACTIVE")]
    Inactive,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
