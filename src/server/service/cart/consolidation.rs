//! Guest cart consolidation.
//!
//! When a customer signs in or registers, the cart they filled anonymously is folded into
//! the cart they already own. Quantities of products present in both carts are summed, the
//! rest of the guest lines move over, and the guest cart is deleted. The whole merge runs in
//! one transaction with the guest cart row locked, so a failure leaves both carts untouched
//! and two concurrent sign-ins cannot merge the same guest cart twice.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::cart::CartRepository,
    error::{internal::InternalError, AppError},
};

pub struct CartConsolidator<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartConsolidator<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Merges the guest cart into the user's cart.
    ///
    /// A missing guest cart, or one already owned by the user, changes nothing. A guest cart
    /// owned by a different user is left alone.
    ///
    /// # Arguments
    /// - `guest_cart_id` - Cart id held by the session before authentication
    /// - `user_id` - The user who just authenticated
    ///
    /// # Returns
    /// - `Ok(Some(cart_id))` - The user's surviving cart, for the session to remember
    /// - `Ok(None)` - The user has no cart
    /// - `Err(AppError)` - Nothing was changed
    pub async fn consolidate(
        &self,
        guest_cart_id: Option<i32>,
        user_id: i32,
    ) -> Result<Option<i32>, AppError> {
        let txn = self.db.begin().await?;
        let cart_repo = CartRepository::new(&txn);

        // Lock the guest cart before looking at either cart's contents
        let guest = match guest_cart_id {
            Some(cart_id) => cart_repo.find_by_id_for_update(cart_id).await?,
            None => None,
        };

        let user_cart = cart_repo.find_by_user(user_id).await?;

        let Some(guest) = guest else {
            txn.commit().await?;
            return Ok(user_cart.map(|cart| cart.id));
        };

        match guest.user_id {
            Some(owner) if owner == user_id => {
                txn.commit().await?;
                return Ok(Some(guest.id));
            }
            Some(owner) => {
                tracing::warn!(
                    "Session cart {} belongs to user {}, not consolidating into user {}",
                    guest.id,
                    owner,
                    user_id
                );
                txn.commit().await?;
                return Ok(user_cart.map(|cart| cart.id));
            }
            None => {}
        }

        let Some(user_cart) = user_cart else {
            cart_repo.set_owner(guest.id, user_id).await?;
            txn.commit().await?;

            tracing::info!("Assigned guest cart {} to user {}", guest.id, user_id);
            return Ok(Some(guest.id));
        };

        let guest_items = cart_repo.items(guest.id).await?;
        let mut merged = 0;
        let mut moved = 0;

        for item in guest_items {
            match cart_repo.find_item(user_cart.id, item.product_id).await? {
                Some(existing) => {
                    let quantity = existing.quantity.checked_add(item.quantity).ok_or_else(|| {
                        InternalError::AmountOverflow {
                            context: format!(
                                "quantity of product {} in cart {}",
                                item.product_id, user_cart.id
                            ),
                        }
                    })?;

                    cart_repo
                        .set_item_quantity(user_cart.id, item.product_id, quantity)
                        .await?;
                    cart_repo.delete_item(guest.id, item.product_id).await?;
                    merged += 1;
                }
                None => {
                    cart_repo
                        .move_item(guest.id, user_cart.id, item.product_id)
                        .await?;
                    moved += 1;
                }
            }
        }

        cart_repo.delete(guest.id).await?;
        cart_repo.set_owner(user_cart.id, user_id).await?;

        txn.commit().await?;

        tracing::info!(
            "Consolidated guest cart {} into cart {} for user {} ({} merged, {} moved)",
            guest.id,
            user_cart.id,
            user_id,
            merged,
            moved
        );

        Ok(Some(user_cart.id))
    }
}
