//! Checkout entry and the authentication step.

use crate::server::{
    data::cart::CartRepository,
    error::AppError,
    model::{
        cart::CartCaller,
        checkout::{CheckoutSession, CheckoutStep, Transition},
    },
    service::cart::{consolidation::CartConsolidator, resolve_cart},
};

use super::CheckoutService;

impl<'a> CheckoutService<'a> {
    /// Starts checkout from the caller's cart.
    ///
    /// An authenticated caller's session cart is consolidated first so the cart carried
    /// through checkout is the one the user owns.
    ///
    /// # Returns
    /// - `Ok(Transition)` - Onward to shipping when authenticated, otherwise to the auth step
    /// - `Err(AppError::NotFound)` - No cart, or the cart is empty
    pub async fn begin(
        &self,
        session: &mut CheckoutSession,
        user_id: Option<i32>,
    ) -> Result<Transition, AppError> {
        let cart_id = match user_id {
            Some(user_id) => {
                CartConsolidator::new(self.db)
                    .consolidate(session.cart_id, user_id)
                    .await?
            }
            None => resolve_cart(
                self.db,
                CartCaller {
                    user_id: None,
                    session_cart_id: session.cart_id,
                },
            )
            .await?
            .map(|cart| cart.id),
        };

        session.record_cart(cart_id);

        let Some(cart_id) = cart_id else {
            return Err(AppError::NotFound("Cart is empty".to_string()));
        };

        if CartRepository::new(self.db).count_items(cart_id).await? == 0 {
            return Err(AppError::NotFound("Cart is empty".to_string()));
        }

        let transition = CheckoutSession::entry(user_id.is_some());
        tracing::info!(
            "Checkout started with cart {} for user {:?}, next step {}",
            cart_id,
            user_id,
            transition.location()
        );

        Ok(transition)
    }

    /// Completes the authentication step for a user who just signed in or registered.
    ///
    /// Consolidates the session's guest cart into the user's cart and records the surviving
    /// cart on the session. Shipping, payment and order selections made before signing in
    /// are discarded.
    pub async fn sign_in(
        &self,
        session: &mut CheckoutSession,
        user_id: i32,
    ) -> Result<Transition, AppError> {
        let cart_id = CartConsolidator::new(self.db)
            .consolidate(session.cart_id, user_id)
            .await?;

        session.reset_selections();
        session.record_cart(cart_id);

        tracing::info!("User {} signed in to checkout with cart {:?}", user_id, cart_id);

        Ok(Transition::Advance(CheckoutStep::Shipping))
    }
}
