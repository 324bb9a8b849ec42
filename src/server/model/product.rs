use chrono::{DateTime, Utc};

use crate::{
    model::product::{PaginatedProductsDto, ProductDto},
    server::util::money::cents_to_decimal,
};

pub const DEFAULT_PRODUCTS_PER_PAGE: u64 = 20;
pub const MAX_PRODUCTS_PER_PAGE: u64 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn from_entity(entity: entity::product::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price_cents: entity.price_cents,
            image_url: entity.image_url,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            name: self.name,
            description: self.description,
            price: cents_to_decimal(self.price_cents),
            image_url: self.image_url,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetProductsParam {
    pub page: u64,
    pub per_page: u64,
}

impl GetProductsParam {
    /// Clamps the page size to `1..=MAX_PRODUCTS_PER_PAGE`.
    pub fn new(page: u64, per_page: Option<u64>) -> Self {
        let per_page = per_page
            .unwrap_or(DEFAULT_PRODUCTS_PER_PAGE)
            .clamp(1, MAX_PRODUCTS_PER_PAGE);
        Self { page, per_page }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedProducts {
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedProducts {
    pub fn into_dto(self) -> PaginatedProductsDto {
        PaginatedProductsDto {
            products: self.products.into_iter().map(Product::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
