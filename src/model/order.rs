use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderDto {
    pub id: i32,
    pub status: String,
    pub shipping_address_id: i32,
    pub billing_address_id: i32,
    pub payment_id: i32,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderItemDto {
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderDetailDto {
    pub order: OrderDto,
    pub items: Vec<OrderItemDto>,
}
