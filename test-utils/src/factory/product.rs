//! Product factory for catalog rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    price_cents: i64,
    image_url: Option<String>,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory priced at 10.00 with no image.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Product {}", id),
            description: format!("Description for product {}", id),
            price_cents: 1_000,
            image_url: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = price_cents;
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        entity::product::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            price_cents: ActiveValue::Set(self.price_cents),
            image_url: ActiveValue::Set(self.image_url),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a product with default values.
pub async fn create_product(db: &DatabaseConnection) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db).build().await
}

/// Creates a product with a specific price in cents.
pub async fn create_product_with_price(
    db: &DatabaseConnection,
    price_cents: i64,
) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db).price_cents(price_cents).build().await
}
