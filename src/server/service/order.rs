//! Order materialization and order history.
//!
//! Placing an order turns a reviewed checkout bundle into an order row plus one snapshot line
//! per cart line. Every referenced entity is re-read and ownership-checked inside the
//! transaction since the ids come from session state that may be stale. The order, its items
//! and the removal of the source cart commit together or not at all.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{cart::CartRepository, order::OrderRepository},
    error::AppError,
    model::{
        cart::Cart,
        order::{CheckoutBundle, CreateOrderItemParam, CreateOrderParam, Order, OrderDetail},
    },
    service::{address::find_owned_address, payment::find_owned_card},
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places an order from the bundle's cart.
    ///
    /// The cart row is locked before its lines are read. Each order line copies the product,
    /// quantity and current unit price; the total is the sum over the cart's lines. The cart
    /// is deleted once the order is written.
    ///
    /// # Returns
    /// - `Ok(Order)` - The committed order
    /// - `Err(AppError::NotFound)` - Cart, address or card no longer exists
    /// - `Err(AppError::Forbidden)` - Cart, address or card belongs to another user
    /// - `Err(AppError::BadRequest)` - The cart is empty
    /// - `Err(AppError::DbErr)` - Persistence failure; nothing was written
    pub async fn place(&self, bundle: CheckoutBundle) -> Result<Order, AppError> {
        let txn = self.db.begin().await?;
        let cart_repo = CartRepository::new(&txn);
        let order_repo = OrderRepository::new(&txn);

        let cart = cart_repo
            .find_by_id_for_update(bundle.cart_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cart {} not found", bundle.cart_id)))?;

        if cart.user_id != Some(bundle.user_id) {
            return Err(AppError::Forbidden(
                "Cart does not belong to the current user".to_string(),
            ));
        }

        find_owned_address(&txn, bundle.user_id, bundle.shipping_address_id).await?;
        find_owned_address(&txn, bundle.user_id, bundle.billing_address_id).await?;
        find_owned_card(&txn, bundle.user_id, bundle.payment_id).await?;

        let cart = Cart {
            id: cart.id,
            user_id: cart.user_id,
            lines: cart_repo.lines(cart.id).await?,
        };

        if cart.is_empty() {
            return Err(AppError::BadRequest("Cart is empty".to_string()));
        }

        let order = order_repo
            .create(CreateOrderParam {
                user_id: bundle.user_id,
                shipping_address_id: bundle.shipping_address_id,
                billing_address_id: bundle.billing_address_id,
                payment_id: bundle.payment_id,
                total_cents: cart.total_cents()?,
            })
            .await?;

        for line in &cart.lines {
            order_repo
                .create_item(CreateOrderItemParam {
                    order_id: order.id,
                    product_id: line.product.id,
                    quantity: line.quantity,
                    unit_price_cents: line.product.price_cents,
                })
                .await?;
        }

        cart_repo.delete(cart.id).await?;

        txn.commit().await?;

        tracing::info!(
            "User {} placed order {} from cart {} ({} lines, {} cents)",
            bundle.user_id,
            order.id,
            cart.id,
            cart.lines.len(),
            order.total_cents
        );

        Ok(order)
    }

    /// Gets an order with its lines for its owner.
    ///
    /// # Returns
    /// - `Ok(OrderDetail)` - The order and its lines
    /// - `Err(AppError::NotFound)` - No such order
    /// - `Err(AppError::Forbidden)` - The order belongs to another user
    pub async fn get_detail(&self, user_id: i32, order_id: i32) -> Result<OrderDetail, AppError> {
        let order_repo = OrderRepository::new(self.db);

        let order = order_repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))?;

        if order.user_id != user_id {
            return Err(AppError::Forbidden(
                "Order belongs to another user".to_string(),
            ));
        }

        let items = order_repo.items(order.id).await?;

        Ok(OrderDetail { order, items })
    }

    pub async fn list(&self, user_id: i32) -> Result<Vec<Order>, AppError> {
        let order_repo = OrderRepository::new(self.db);
        Ok(order_repo.list_by_user(user_id).await?)
    }
}
