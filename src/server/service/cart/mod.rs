//! Cart store.
//!
//! A cart is found either through its owner or through the cart id remembered by the
//! caller's session. Every operation returns the cart the caller should remember afterwards
//! (`None` once the cart is gone) so the controller can keep the session in step after the
//! transaction has committed.
//!
//! - `consolidation` - Merging a guest cart into a user's cart at sign-in

pub mod consolidation;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{cart::CartRepository, product::ProductRepository},
    error::AppError,
    model::cart::{Cart, CartCaller, CartRecord},
};

pub struct CartService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the caller's cart without modifying anything.
    pub async fn resolve(&self, caller: CartCaller) -> Result<Option<CartRecord>, AppError> {
        resolve_cart(self.db, caller).await
    }

    /// Gets the caller's cart with its lines, or `None` when there is no cart.
    pub async fn get(&self, caller: CartCaller) -> Result<Option<Cart>, AppError> {
        let Some(record) = resolve_cart(self.db, caller).await? else {
            return Ok(None);
        };

        Ok(Some(self.load(record).await?))
    }

    /// Adds units of a product to the caller's cart, creating the cart on first add.
    ///
    /// Repeat adds accumulate onto the existing line. An anonymous cart picked up by an
    /// authenticated caller is claimed for that user.
    ///
    /// # Returns
    /// - `Ok(Cart)` - The cart after the add
    /// - `Err(AppError::BadRequest)` - Quantity below 1 or the line would overflow
    /// - `Err(AppError::NotFound)` - No such product
    pub async fn add_item(
        &self,
        caller: CartCaller,
        product_id: i32,
        quantity: i32,
    ) -> Result<Cart, AppError> {
        if quantity < 1 {
            return Err(AppError::BadRequest(
                "Quantity must be at least 1".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let cart_repo = CartRepository::new(&txn);

        if ProductRepository::new(&txn)
            .find_by_id(product_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("Product {} not found", product_id)));
        }

        let record = match resolve_cart(&txn, caller).await? {
            Some(record) => {
                if let (None, Some(user_id)) = (record.user_id, caller.user_id) {
                    cart_repo.set_owner(record.id, user_id).await?;
                }
                CartRecord {
                    id: record.id,
                    user_id: record.user_id.or(caller.user_id),
                }
            }
            None => {
                let record = cart_repo.create(caller.user_id).await?;
                tracing::debug!("Created cart {} for user {:?}", record.id, caller.user_id);
                record
            }
        };

        // Guard the accumulated quantity before the database adds it
        if let Some(existing) = cart_repo.find_item(record.id, product_id).await? {
            if existing.quantity.checked_add(quantity).is_none() {
                return Err(AppError::BadRequest("Quantity is too large".to_string()));
            }
        }

        cart_repo.add_quantity(record.id, product_id, quantity).await?;

        txn.commit().await?;

        self.load(record).await
    }

    /// Sets the quantity of an existing line. A quantity of 0 removes the line.
    ///
    /// # Returns
    /// - `Ok(Some(Cart))` - The cart after the change
    /// - `Ok(None)` - The last line was removed and the cart deleted
    /// - `Err(AppError::BadRequest)` - Negative quantity
    /// - `Err(AppError::NotFound)` - No cart, or no line for that product
    pub async fn set_quantity(
        &self,
        caller: CartCaller,
        product_id: i32,
        quantity: i32,
    ) -> Result<Option<Cart>, AppError> {
        if quantity < 0 {
            return Err(AppError::BadRequest(
                "Quantity cannot be negative".to_string(),
            ));
        }
        if quantity == 0 {
            return self.remove_item(caller, product_id).await;
        }

        let record = self.require_cart(caller).await?;

        let txn = self.db.begin().await?;
        let cart_repo = CartRepository::new(&txn);

        if cart_repo.find_item(record.id, product_id).await?.is_none() {
            return Err(line_not_found(product_id));
        }

        cart_repo
            .set_item_quantity(record.id, product_id, quantity)
            .await?;

        txn.commit().await?;

        Ok(Some(self.load(record).await?))
    }

    /// Removes one line. Removing the last line deletes the cart.
    ///
    /// # Returns
    /// - `Ok(Some(Cart))` - The cart after the removal
    /// - `Ok(None)` - The cart was emptied and deleted
    /// - `Err(AppError::NotFound)` - No cart, or no line for that product
    pub async fn remove_item(
        &self,
        caller: CartCaller,
        product_id: i32,
    ) -> Result<Option<Cart>, AppError> {
        let record = self.require_cart(caller).await?;

        let txn = self.db.begin().await?;
        let cart_repo = CartRepository::new(&txn);

        if !cart_repo.delete_item(record.id, product_id).await? {
            return Err(line_not_found(product_id));
        }

        let emptied = cart_repo.count_items(record.id).await? == 0;
        if emptied {
            cart_repo.delete(record.id).await?;
        }

        txn.commit().await?;

        if emptied {
            tracing::debug!("Deleted emptied cart {}", record.id);
            return Ok(None);
        }

        Ok(Some(self.load(record).await?))
    }

    /// Deletes the caller's cart and all of its lines.
    ///
    /// # Returns
    /// - `Ok(true)` - Cart deleted
    /// - `Ok(false)` - The caller had no cart
    pub async fn delete(&self, caller: CartCaller) -> Result<bool, AppError> {
        let Some(record) = resolve_cart(self.db, caller).await? else {
            return Ok(false);
        };

        let txn = self.db.begin().await?;
        let deleted = CartRepository::new(&txn).delete(record.id).await?;
        txn.commit().await?;

        Ok(deleted)
    }

    async fn require_cart(&self, caller: CartCaller) -> Result<CartRecord, AppError> {
        resolve_cart(self.db, caller)
            .await?
            .ok_or_else(|| AppError::NotFound("Cart not found".to_string()))
    }

    async fn load(&self, record: CartRecord) -> Result<Cart, AppError> {
        let lines = CartRepository::new(self.db).lines(record.id).await?;

        Ok(Cart {
            id: record.id,
            user_id: record.user_id,
            lines,
        })
    }
}

/// Resolves the caller's cart.
///
/// 1. An authenticated caller's own cart.
/// 2. Otherwise the session's cart, if it still exists and is anonymous or the caller's.
/// 3. Otherwise none.
pub async fn resolve_cart<C: ConnectionTrait>(
    db: &C,
    caller: CartCaller,
) -> Result<Option<CartRecord>, AppError> {
    let cart_repo = CartRepository::new(db);

    if let Some(user_id) = caller.user_id {
        if let Some(record) = cart_repo.find_by_user(user_id).await? {
            return Ok(Some(record));
        }
    }

    let Some(cart_id) = caller.session_cart_id else {
        return Ok(None);
    };

    let record = cart_repo
        .find_by_id(cart_id)
        .await?
        .filter(|record| record.user_id.is_none() || record.user_id == caller.user_id);

    Ok(record)
}

fn line_not_found(product_id: i32) -> AppError {
    AppError::NotFound(format!("Product {} is not in the cart", product_id))
}
