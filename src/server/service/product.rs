use sea_orm::DatabaseConnection;

use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    model::product::{GetProductsParam, PaginatedProducts, Product},
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of the catalogue ordered by product name.
    pub async fn get_paginated(
        &self,
        param: GetProductsParam,
    ) -> Result<PaginatedProducts, AppError> {
        let product_repo = ProductRepository::new(self.db);

        let (products, total) = product_repo
            .get_paginated(param.page, param.per_page)
            .await?;

        Ok(PaginatedProducts {
            products,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages: total.div_ceil(param.per_page),
        })
    }

    pub async fn get_by_id(&self, product_id: i32) -> Result<Product, AppError> {
        let product_repo = ProductRepository::new(self.db);

        product_repo
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", product_id)))
    }
}
