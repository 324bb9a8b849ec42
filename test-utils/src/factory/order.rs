//! Order factory for order history tests.

use chrono::Utc;
use entity::order::OrderStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a pending order for `user_id` with one line per `(product_id, quantity,
/// unit_price_cents)` entry. The total is derived from the lines.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
    address_id: i32,
    card_id: i32,
    lines: &[(i32, i32, i64)],
) -> Result<entity::order::Model, DbErr> {
    let total_cents = lines
        .iter()
        .map(|(_, quantity, unit_price)| i64::from(*quantity) * unit_price)
        .sum();

    let order = entity::order::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        status: ActiveValue::Set(OrderStatus::Pending),
        shipping_address_id: ActiveValue::Set(address_id),
        billing_address_id: ActiveValue::Set(address_id),
        payment_id: ActiveValue::Set(card_id),
        total_cents: ActiveValue::Set(total_cents),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    for (product_id, quantity, unit_price_cents) in lines {
        entity::order_item::ActiveModel {
            order_id: ActiveValue::Set(order.id),
            product_id: ActiveValue::Set(*product_id),
            quantity: ActiveValue::Set(*quantity),
            unit_price_cents: ActiveValue::Set(*unit_price_cents),
        }
        .insert(db)
        .await?;
    }

    Ok(order)
}
