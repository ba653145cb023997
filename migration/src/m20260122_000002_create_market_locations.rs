use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MarketLocations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MarketLocations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MarketLocations::Name)
                            .string_len(250)
                            .not_null(),
                    )
                    .col(ColumnDef::new(MarketLocations::Kind).string_len(20).null())
                    .col(
                        ColumnDef::new(MarketLocations::Status)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(MarketLocations::Latitude).double().null())
                    .col(ColumnDef::new(MarketLocations::Longitude).double().null())
                    .col(
                        ColumnDef::new(MarketLocations::OpeningTime)
                            .timestamp()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(MarketLocations::ClosingTime)
                            .timestamp()
                            .null(),
                    )
                    .col(ColumnDef::new(MarketLocations::Rating).double().null())
                    .col(ColumnDef::new(MarketLocations::Description).text().null())
                    .col(
                        ColumnDef::new(MarketLocations::CreatedAt)
                            .timestamp()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .col(
                        ColumnDef::new(MarketLocations::UpdatedAt)
                            .timestamp()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Identity key for bulk find-or-create is the exact trimmed name
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_market_locations_name")
                    .table(MarketLocations::Table)
                    .col(MarketLocations::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MarketLocations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MarketLocations {
    Table,
    Id,
    Name,
    Kind,
    Status,
    Latitude,
    Longitude,
    OpeningTime,
    ClosingTime,
    Rating,
    Description,
    CreatedAt,
    UpdatedAt,
}
