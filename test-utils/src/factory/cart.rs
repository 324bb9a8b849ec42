//! Cart factories.
//!
//! Carts and their lines are created separately so tests can build guest carts, owned carts
//! and empty carts independently.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a cart, owned by `user_id` or anonymous when `None`.
pub async fn create_cart(
    db: &DatabaseConnection,
    user_id: Option<i32>,
) -> Result<entity::cart::Model, DbErr> {
    entity::cart::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a cart line with the given quantity.
pub async fn create_cart_item(
    db: &DatabaseConnection,
    cart_id: i32,
    product_id: i32,
    quantity: i32,
) -> Result<entity::cart_item::Model, DbErr> {
    entity::cart_item::ActiveModel {
        cart_id: ActiveValue::Set(cart_id),
        product_id: ActiveValue::Set(product_id),
        quantity: ActiveValue::Set(quantity),
    }
    .insert(db)
    .await
}
