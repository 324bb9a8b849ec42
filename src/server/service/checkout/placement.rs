//! Review, order placement and confirmation.

use crate::server::{
    data::cart::CartRepository,
    error::AppError,
    model::{
        cart::Cart,
        checkout::{CheckoutReview, CheckoutSession, CheckoutStep, Transition},
        order::{CheckoutBundle, OrderDetail},
    },
    service::{address::find_owned_address, order::OrderService, payment::find_owned_card},
};

use super::{back_on_missing, CheckoutService};

impl<'a> CheckoutService<'a> {
    /// Assembles the cart, addresses and payment method for confirmation.
    ///
    /// Read-only, so repeated calls with the same session return the same review.
    ///
    /// # Returns
    /// - `Ok(Ok(CheckoutReview))` - Everything is in place
    /// - `Ok(Err(Transition))` - Something is missing; route back to the step producing it
    /// - `Err(AppError::Forbidden)` - A referenced entity belongs to another user
    pub async fn review(
        &self,
        session: &CheckoutSession,
        user_id: i32,
    ) -> Result<Result<CheckoutReview, Transition>, AppError> {
        let ids = match session.review_ids() {
            Ok(ids) => ids,
            Err(transition) => return Ok(Err(transition)),
        };

        let cart_repo = CartRepository::new(self.db);

        let Some(record) = cart_repo.find_by_id(ids.cart_id).await? else {
            return Ok(Err(Transition::ToCart));
        };
        match record.user_id {
            Some(owner) if owner == user_id => {}
            Some(_) => {
                return Err(AppError::Forbidden(
                    "Cart does not belong to the current user".to_string(),
                ))
            }
            // Checkout entry claims the cart for the user
            None => return Ok(Err(Transition::Back(CheckoutStep::Start))),
        }

        let cart = Cart {
            id: record.id,
            user_id: record.user_id,
            lines: cart_repo.lines(record.id).await?,
        };
        if cart.is_empty() {
            return Ok(Err(Transition::ToCart));
        }

        let shipping_address = match back_on_missing(
            find_owned_address(self.db, user_id, ids.shipping_address_id).await,
            CheckoutStep::Shipping,
        )? {
            Ok(address) => address,
            Err(transition) => return Ok(Err(transition)),
        };

        let billing_address = match back_on_missing(
            find_owned_address(self.db, user_id, ids.billing_address_id).await,
            CheckoutStep::Payment,
        )? {
            Ok(address) => address,
            Err(transition) => return Ok(Err(transition)),
        };

        let payment = match back_on_missing(
            find_owned_card(self.db, user_id, ids.payment_id).await,
            CheckoutStep::Payment,
        )? {
            Ok(card) => card,
            Err(transition) => return Ok(Err(transition)),
        };

        Ok(Ok(CheckoutReview {
            cart,
            shipping_address,
            billing_address,
            payment,
        }))
    }

    /// Places the order for the reviewed session.
    ///
    /// The review is re-run first; an incomplete session routes back without placing
    /// anything. After the order commits the session keeps only the order id.
    ///
    /// # Returns
    /// - `Ok(Transition::Advance(Placed))` - Order placed and recorded on the session
    /// - `Ok(Transition)` - Session incomplete; nothing was written
    /// - `Err(AppError)` - Ownership or persistence failure; nothing was written
    pub async fn place_order(
        &self,
        session: &mut CheckoutSession,
        user_id: i32,
    ) -> Result<Transition, AppError> {
        let review = match self.review(session, user_id).await? {
            Ok(review) => review,
            Err(transition) => return Ok(transition),
        };

        let bundle = CheckoutBundle {
            user_id,
            cart_id: review.cart.id,
            shipping_address_id: review.shipping_address.id,
            billing_address_id: review.billing_address.id,
            payment_id: review.payment.id,
        };

        let order = OrderService::new(self.db).place(bundle).await?;

        Ok(session.record_order(order.id))
    }

    /// Gets the order placed by this session.
    ///
    /// # Returns
    /// - `Ok(Ok(OrderDetail))` - The order and its lines
    /// - `Ok(Err(Transition::ToCart))` - The session has not placed an order
    /// - `Err(AppError::Forbidden)` - The order belongs to another user
    pub async fn confirmation(
        &self,
        session: &CheckoutSession,
        user_id: i32,
    ) -> Result<Result<OrderDetail, Transition>, AppError> {
        let Some(order_id) = session.order_id else {
            return Ok(Err(Transition::ToCart));
        };

        let detail = OrderService::new(self.db)
            .get_detail(user_id, order_id)
            .await?;

        Ok(Ok(detail))
    }
}
