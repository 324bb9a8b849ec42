//! Product catalogue repository.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder};

use crate::server::model::product::Product;

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, DbErr> {
        let entity = entity::prelude::Product::find_by_id(product_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Product::from_entity))
    }

    /// Gets one page of products ordered by name.
    ///
    /// # Arguments
    /// - `page` - Zero-based page number
    /// - `per_page` - Number of products per page
    ///
    /// # Returns
    /// - `Ok((products, total))` - Products on the page and the total product count
    /// - `Err(DbErr)` - Database error during the query
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<(Vec<Product>, u64), DbErr> {
        let paginator = entity::prelude::Product::find()
            .order_by_asc(entity::product::Column::Name)
            .order_by_asc(entity::product::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(Product::from_entity).collect(),
            total,
        ))
    }
}
