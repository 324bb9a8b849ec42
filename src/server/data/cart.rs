//! Cart and cart line repository.
//!
//! Cart lines are keyed by `(cart_id, product_id)`. Quantity accumulation is done by the
//! database through an upsert so a product never appears twice in one cart.

use sea_orm::{
    sea_query::{Expr, ExprTrait, OnConflict},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    cart::{CartItemRecord, CartLine, CartRecord},
    product::Product,
};

pub struct CartRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CartRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an empty cart, anonymous when `user_id` is `None`.
    pub async fn create(&self, user_id: Option<i32>) -> Result<CartRecord, DbErr> {
        let entity = entity::cart::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CartRecord::from_entity(entity))
    }

    pub async fn find_by_id(&self, cart_id: i32) -> Result<Option<CartRecord>, DbErr> {
        let entity = entity::prelude::Cart::find_by_id(cart_id)
            .one(self.db)
            .await?;

        Ok(entity.map(CartRecord::from_entity))
    }

    /// Finds a cart and takes a row lock on it for the rest of the transaction.
    ///
    /// Backends without row locks (SQLite) serialize writers at the database level instead.
    pub async fn find_by_id_for_update(&self, cart_id: i32) -> Result<Option<CartRecord>, DbErr> {
        let entity = entity::prelude::Cart::find_by_id(cart_id)
            .lock_exclusive()
            .one(self.db)
            .await?;

        Ok(entity.map(CartRecord::from_entity))
    }

    /// Finds the user's cart. If several exist the oldest wins.
    pub async fn find_by_user(&self, user_id: i32) -> Result<Option<CartRecord>, DbErr> {
        let entity = entity::prelude::Cart::find()
            .filter(entity::cart::Column::UserId.eq(user_id))
            .order_by_asc(entity::cart::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(CartRecord::from_entity))
    }

    pub async fn count_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Cart::find()
            .filter(entity::cart::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }

    pub async fn set_owner(&self, cart_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::Cart::update_many()
            .col_expr(entity::cart::Column::UserId, Expr::value(Some(user_id)))
            .filter(entity::cart::Column::Id.eq(cart_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes a cart and all of its lines.
    ///
    /// # Returns
    /// - `Ok(true)` - Cart deleted
    /// - `Ok(false)` - No cart with that id
    pub async fn delete(&self, cart_id: i32) -> Result<bool, DbErr> {
        entity::prelude::CartItem::delete_many()
            .filter(entity::cart_item::Column::CartId.eq(cart_id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Cart::delete_by_id(cart_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the cart's lines with their products, ordered by product id.
    pub async fn lines(&self, cart_id: i32) -> Result<Vec<CartLine>, DbErr> {
        let rows = entity::prelude::CartItem::find()
            .filter(entity::cart_item::Column::CartId.eq(cart_id))
            .order_by_asc(entity::cart_item::Column::ProductId)
            .find_also_related(entity::prelude::Product)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(item, product)| {
                let product = product.ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Product {} referenced by cart {}",
                        item.product_id, item.cart_id
                    ))
                })?;
                Ok(CartLine {
                    product: Product::from_entity(product),
                    quantity: item.quantity,
                })
            })
            .collect()
    }

    pub async fn items(&self, cart_id: i32) -> Result<Vec<CartItemRecord>, DbErr> {
        let entities = entity::prelude::CartItem::find()
            .filter(entity::cart_item::Column::CartId.eq(cart_id))
            .order_by_asc(entity::cart_item::Column::ProductId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CartItemRecord::from_entity).collect())
    }

    pub async fn count_items(&self, cart_id: i32) -> Result<u64, DbErr> {
        entity::prelude::CartItem::find()
            .filter(entity::cart_item::Column::CartId.eq(cart_id))
            .count(self.db)
            .await
    }

    pub async fn find_item(
        &self,
        cart_id: i32,
        product_id: i32,
    ) -> Result<Option<CartItemRecord>, DbErr> {
        let entity = entity::prelude::CartItem::find_by_id((cart_id, product_id))
            .one(self.db)
            .await?;

        Ok(entity.map(CartItemRecord::from_entity))
    }

    /// Adds `quantity` units of a product, inserting the line or growing the existing one.
    pub async fn add_quantity(
        &self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), DbErr> {
        entity::prelude::CartItem::insert(entity::cart_item::ActiveModel {
            cart_id: ActiveValue::Set(cart_id),
            product_id: ActiveValue::Set(product_id),
            quantity: ActiveValue::Set(quantity),
        })
        .on_conflict(
            OnConflict::columns([
                entity::cart_item::Column::CartId,
                entity::cart_item::Column::ProductId,
            ])
            .value(
                entity::cart_item::Column::Quantity,
                Expr::col(entity::cart_item::Column::Quantity).add(quantity),
            )
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Overwrites the quantity of an existing line.
    pub async fn set_item_quantity(
        &self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), DbErr> {
        entity::cart_item::ActiveModel {
            cart_id: ActiveValue::Unchanged(cart_id),
            product_id: ActiveValue::Unchanged(product_id),
            quantity: ActiveValue::Set(quantity),
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Re-keys a line from one cart to another.
    pub async fn move_item(
        &self,
        from_cart_id: i32,
        to_cart_id: i32,
        product_id: i32,
    ) -> Result<(), DbErr> {
        entity::prelude::CartItem::update_many()
            .col_expr(entity::cart_item::Column::CartId, Expr::value(to_cart_id))
            .filter(entity::cart_item::Column::CartId.eq(from_cart_id))
            .filter(entity::cart_item::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes one line.
    ///
    /// # Returns
    /// - `Ok(true)` - Line deleted
    /// - `Ok(false)` - The cart had no line for that product
    pub async fn delete_item(&self, cart_id: i32, product_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CartItem::delete_by_id((cart_id, product_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
