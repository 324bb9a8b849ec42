//! Type-safe session management wrappers.
//!
//! The server-side session carries the checkout state and a one-shot flash message. Both
//! are accessed through `CheckoutFlowSession` so the key names and value types live in one
//! place. The cart store shares the checkout state's `cart_id`, so a cart created from the
//! cart API is the one checkout starts from.
//!
//! Callers write the session only after any database transaction of the same request has
//! committed.

use tower_sessions::Session;

use crate::server::{
    error::AppError,
    model::{cart::CartCaller, checkout::CheckoutSession},
};

// Session key constants
const SESSION_CHECKOUT_STATE: &str = "checkout:state";
const SESSION_CHECKOUT_FLASH: &str = "checkout:flash";

/// Checkout state and flash message management.
pub struct CheckoutFlowSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> CheckoutFlowSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Loads the checkout state, starting from an empty one when none is stored.
    ///
    /// # Returns
    /// - `Ok(CheckoutSession)` - Stored or empty state
    /// - `Err(AppError::SessionErr(_))` - Failed to read or decode the session
    pub async fn load(&self) -> Result<CheckoutSession, AppError> {
        let state = self
            .session
            .get::<CheckoutSession>(SESSION_CHECKOUT_STATE)
            .await?
            .unwrap_or_default();
        Ok(state)
    }

    /// Stores the checkout state, replacing what was there.
    pub async fn save(&self, state: &CheckoutSession) -> Result<(), AppError> {
        self.session.insert(SESSION_CHECKOUT_STATE, state).await?;
        Ok(())
    }

    pub async fn cart_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.load().await?.cart_id)
    }

    /// Records the cart the caller should use from now on. Writes only when it changed.
    pub async fn set_cart_id(&self, cart_id: Option<i32>) -> Result<(), AppError> {
        let mut state = self.load().await?;
        if state.cart_id == cart_id {
            return Ok(());
        }

        state.record_cart(cart_id);
        self.save(&state).await
    }

    /// Builds the cart lookup for this session and an optional authenticated user.
    pub async fn cart_caller(&self, user_id: Option<i32>) -> Result<CartCaller, AppError> {
        Ok(CartCaller {
            user_id,
            session_cart_id: self.cart_id().await?,
        })
    }

    /// Stores a message for the next GET of a checkout step.
    pub async fn set_flash(&self, message: String) -> Result<(), AppError> {
        self.session.insert(SESSION_CHECKOUT_FLASH, message).await?;
        Ok(())
    }

    /// Retrieves and removes the flash message, so it is shown once.
    pub async fn take_flash(&self) -> Result<Option<String>, AppError> {
        let message = self.session.remove(SESSION_CHECKOUT_FLASH).await?;
        Ok(message)
    }

    /// Clears all data from the session.
    ///
    /// Used during logout, which ends the checkout along with the session.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
