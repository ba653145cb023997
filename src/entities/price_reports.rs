//! SeaORM Entity for ingestion report headers, one per reported date

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "price_reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Calendar date the source reported prices for (dedup key, unique)
    pub date_reported: Date,
    /// When this run ingested the report
    pub date_processed: DateTime,
    /// Source page the scrape came from
    #[sea_orm(column_type = "Text", nullable)]
    pub url: Option<String>,
    pub status: ReportStatus,
    pub created_at: Option<DateTime>,
}

/// Outcome of the scrape run as reported by the external worker.
///
/// Parsed from free-form worker output; anything unrecognized maps to
/// `Failed` instead of erroring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ReportStatus {
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
    #[sea_orm(string_value = "FAILED")]
    Failed,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
