use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DailyPriceRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DailyPriceRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DailyPriceRecords::Price)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DailyPriceRecords::Unit).string_len(20).null())
                    .col(
                        ColumnDef::new(DailyPriceRecords::Origin)
                            .string_len(250)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(DailyPriceRecords::ProductId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DailyPriceRecords::ReportId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DailyPriceRecords::MarketId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DailyPriceRecords::CreatedAt)
                            .timestamp()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_daily_price_records_product_id")
                            .from(DailyPriceRecords::Table, DailyPriceRecords::ProductId)
                            .to(Products::Table, Products::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_daily_price_records_report_id")
                            .from(DailyPriceRecords::Table, DailyPriceRecords::ReportId)
                            .to(PriceReports::Table, PriceReports::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_daily_price_records_market_id")
                            .from(DailyPriceRecords::Table, DailyPriceRecords::MarketId)
                            .to(MarketLocations::Table, MarketLocations::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // The matcher's origin-history check filters on (product_id, origin)
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_daily_price_records_product_origin")
                    .table(DailyPriceRecords::Table)
                    .col(DailyPriceRecords::ProductId)
                    .col(DailyPriceRecords::Origin)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_daily_price_records_report_id")
                    .table(DailyPriceRecords::Table)
                    .col(DailyPriceRecords::ReportId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DailyPriceRecords::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DailyPriceRecords {
    Table,
    Id,
    Price,
    Unit,
    Origin,
    ProductId,
    ReportId,
    MarketId,
    CreatedAt,
}

#[derive(Iden)]
enum Products {
    Table,
    Id,
}

#[derive(Iden)]
enum PriceReports {
    Table,
    Id,
}

#[derive(Iden)]
enum MarketLocations {
    Table,
    Id,
}
