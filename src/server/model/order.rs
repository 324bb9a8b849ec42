//! Order models.

use chrono::{DateTime, Utc};
use entity::order::OrderStatus;

use crate::{
    model::order::{OrderDetailDto, OrderDto, OrderItemDto},
    server::{
        error::AppError,
        util::money::{cents_to_decimal, line_total_cents},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub status: OrderStatus,
    pub shipping_address_id: i32,
    pub billing_address_id: i32,
    pub payment_id: i32,
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn from_entity(entity: entity::order::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            status: entity.status,
            shipping_address_id: entity.shipping_address_id,
            billing_address_id: entity.billing_address_id,
            payment_id: entity.payment_id,
            total_cents: entity.total_cents,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            status: status_label(self.status).to_string(),
            shipping_address_id: self.shipping_address_id,
            billing_address_id: self.billing_address_id,
            payment_id: self.payment_id,
            total: cents_to_decimal(self.total_cents),
            created_at: self.created_at,
        }
    }
}

pub fn status_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "pending",
        OrderStatus::Shipped => "shipped",
        OrderStatus::Delivered => "delivered",
        OrderStatus::Canceled => "canceled",
    }
}

/// Snapshot of one cart line taken when the order was placed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub order_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price_cents: i64,
}

impl OrderItem {
    pub fn into_dto(self) -> Result<OrderItemDto, AppError> {
        Ok(OrderItemDto {
            line_total: cents_to_decimal(line_total_cents(self.unit_price_cents, self.quantity)?),
            unit_price: cents_to_decimal(self.unit_price_cents),
            product_id: self.product_id,
            product_name: self.product_name,
            quantity: self.quantity,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetail {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

impl OrderDetail {
    pub fn into_dto(self) -> Result<OrderDetailDto, AppError> {
        Ok(OrderDetailDto {
            order: self.order.into_dto(),
            items: self
                .items
                .into_iter()
                .map(OrderItem::into_dto)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

/// Fully resolved checkout selections handed to the order materializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutBundle {
    pub user_id: i32,
    pub cart_id: i32,
    pub shipping_address_id: i32,
    pub billing_address_id: i32,
    pub payment_id: i32,
}

/// Order row values computed by the materializer before insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrderParam {
    pub user_id: i32,
    pub shipping_address_id: i32,
    pub billing_address_id: i32,
    pub payment_id: i32,
    pub total_cents: i64,
}

/// One order line to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrderItemParam {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price_cents: i64,
}
