//! Order and order line repository.

use entity::order::OrderStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::order::{CreateOrderItemParam, CreateOrderParam, Order, OrderItem};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending order.
    pub async fn create(&self, param: CreateOrderParam) -> Result<Order, DbErr> {
        let entity = entity::order::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            status: ActiveValue::Set(OrderStatus::Pending),
            shipping_address_id: ActiveValue::Set(param.shipping_address_id),
            billing_address_id: ActiveValue::Set(param.billing_address_id),
            payment_id: ActiveValue::Set(param.payment_id),
            total_cents: ActiveValue::Set(param.total_cents),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Order::from_entity(entity))
    }

    pub async fn create_item(&self, param: CreateOrderItemParam) -> Result<(), DbErr> {
        entity::prelude::OrderItem::insert(entity::order_item::ActiveModel {
            order_id: ActiveValue::Set(param.order_id),
            product_id: ActiveValue::Set(param.product_id),
            quantity: ActiveValue::Set(param.quantity),
            unit_price_cents: ActiveValue::Set(param.unit_price_cents),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, order_id: i32) -> Result<Option<Order>, DbErr> {
        let entity = entity::prelude::Order::find_by_id(order_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Order::from_entity))
    }

    /// Gets the user's orders, newest first.
    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<Order>, DbErr> {
        let entities = entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.eq(user_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Order::from_entity).collect())
    }

    /// Gets the order's lines with product names, ordered by product id.
    pub async fn items(&self, order_id: i32) -> Result<Vec<OrderItem>, DbErr> {
        let rows = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(order_id))
            .order_by_asc(entity::order_item::Column::ProductId)
            .find_also_related(entity::prelude::Product)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(item, product)| OrderItem {
                order_id: item.order_id,
                product_id: item.product_id,
                product_name: product.map(|p| p.name).unwrap_or_default(),
                quantity: item.quantity,
                unit_price_cents: item.unit_price_cents,
            })
            .collect())
    }
}
