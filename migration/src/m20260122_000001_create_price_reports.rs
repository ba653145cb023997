use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PriceReports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PriceReports::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PriceReports::DateReported)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PriceReports::DateProcessed)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PriceReports::Url).text().null())
                    .col(
                        ColumnDef::new(PriceReports::Status)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PriceReports::CreatedAt)
                            .timestamp()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .to_owned(),
            )
            .await?;

        // One report per reported date; duplicate deliveries lose at commit time
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_price_reports_date_reported")
                    .table(PriceReports::Table)
                    .col(PriceReports::DateReported)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PriceReports::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum PriceReports {
    Table,
    Id,
    DateReported,
    DateProcessed,
    Url,
    Status,
    CreatedAt,
}
