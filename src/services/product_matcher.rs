//! Product identity resolution
//!
//! Decides whether a scraped item is an existing active product, a dormant
//! product to reactivate, or a brand-new pending product. Origin-specific
//! observation history counts as verification: a (category, commodity,
//! origin) triple that has appeared before auto-activates the product,
//! while a known product seen under a new origin stays untouched until an
//! administrator reviews it.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};

use crate::entities::daily_price_records;
use crate::entities::prelude::*;
use crate::entities::products::{self, ProductStatus};
use crate::models::scrape::ScrapedItem;

/// Resolves the product identity for one scraped item.
pub async fn find_or_create_product<C: ConnectionTrait>(
    conn: &C,
    item: &ScrapedItem,
) -> Result<products::Model, Box<dyn std::error::Error + Send + Sync>> {
    if origin_history_exists(conn, item).await? {
        activate_existing_product(conn, item).await
    } else {
        create_or_get_pending_product(conn, item).await
    }
}

/// Whether any price observation exists for this (category, commodity,
/// origin) triple. The item carries the fields by name, so there is no
/// positional argument order to get wrong.
async fn origin_history_exists<C: ConnectionTrait>(
    conn: &C,
    item: &ScrapedItem,
) -> Result<bool, DbErr> {
    let Some(product) = find_by_category_and_name(conn, item).await? else {
        return Ok(false);
    };

    let mut query = DailyPriceRecords::find()
        .filter(daily_price_records::Column::ProductId.eq(product.id));
    query = match &item.origin {
        Some(origin) => query.filter(daily_price_records::Column::Origin.eq(origin.clone())),
        None => query.filter(daily_price_records::Column::Origin.is_null()),
    };

    Ok(query.count(conn).await? > 0)
}

async fn find_by_category_and_name<C: ConnectionTrait>(
    conn: &C,
    item: &ScrapedItem,
) -> Result<Option<products::Model>, DbErr> {
    Products::find()
        .filter(products::Column::Category.eq(item.category.clone()))
        .filter(products::Column::ProductName.eq(item.commodity.clone()))
        .one(conn)
        .await
}

/// The triple has verified history, so the product row must exist; a
/// missing row here means the store is corrupted or was mutated underneath
/// us, and the whole batch has to fail rather than continue silently.
async fn activate_existing_product<C: ConnectionTrait>(
    conn: &C,
    item: &ScrapedItem,
) -> Result<products::Model, Box<dyn std::error::Error + Send + Sync>> {
    let Some(product) = find_by_category_and_name(conn, item).await? else {
        return Err(format!(
            "product {}/{} has observation history but no product row",
            item.category, item.commodity
        )
        .into());
    };

    if product.status == ProductStatus::Active {
        tracing::debug!(
            "product already active: {} in category {}",
            product.product_name,
            product.category
        );
        return Ok(product);
    }

    let name = product.product_name.clone();
    let category = product.category.clone();

    let mut active: products::ActiveModel = product.into();
    active.status = Set(ProductStatus::Active);
    active.updated_at = Set(Some(Utc::now().naive_utc()));
    let reactivated = active.update(conn).await?;

    tracing::info!("re-activated product: {} in category {}", name, category);

    Ok(reactivated)
}

/// No verified history for this origin: return the product unchanged if it
/// exists under (category, commodity), otherwise create it as PENDING for
/// review.
async fn create_or_get_pending_product<C: ConnectionTrait>(
    conn: &C,
    item: &ScrapedItem,
) -> Result<products::Model, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(product) = find_by_category_and_name(conn, item).await? {
        tracing::debug!(
            "known product {} in category {} seen under new origin {:?}, leaving as {:?}",
            product.product_name,
            product.category,
            item.origin,
            product.status
        );
        return Ok(product);
    }

    let now = Utc::now().naive_utc();
    let product = products::ActiveModel {
        product_name: Set(item.commodity.clone()),
        category: Set(item.category.clone()),
        status: Set(ProductStatus::Pending),
        created_at: Set(Some(now)),
        ..Default::default()
    };
    let created = product.insert(conn).await?;

    tracing::info!(
        "created new pending product: {} in category {}",
        created.product_name,
        created.category
    );

    Ok(created)
}
