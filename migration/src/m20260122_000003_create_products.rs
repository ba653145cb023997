use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Products::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Products::ProductName)
                            .string_len(250)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Products::Category)
                            .string_len(250)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Products::LocalName).string_len(250).null())
                    .col(ColumnDef::new(Products::Status).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Products::CreatedAt)
                            .timestamp()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .col(ColumnDef::new(Products::UpdatedAt).timestamp().null())
                    .to_owned(),
            )
            .await?;

        // Commodity identity is the (category, product_name) pair
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_products_category_product_name")
                    .table(Products::Table)
                    .col(Products::Category)
                    .col(Products::ProductName)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Products {
    Table,
    Id,
    ProductName,
    Category,
    LocalName,
    Status,
    CreatedAt,
    UpdatedAt,
}
