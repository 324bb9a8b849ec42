//! Shipping and payment steps.

use sea_orm::TransactionTrait;

use crate::server::{
    data::{address::AddressRepository, card::CardRepository},
    error::AppError,
    model::{
        address::AddressChoice,
        checkout::{CheckoutSession, PaymentOptions, ShippingOptions, Transition},
        payment::PaymentChoice,
    },
    service::{
        account::AccountService, address::resolve_address_choice,
        payment::resolve_payment_choice,
    },
};

use super::CheckoutService;

impl<'a> CheckoutService<'a> {
    pub async fn shipping_options(&self, user_id: i32) -> Result<ShippingOptions, AppError> {
        let user = AccountService::new(self.db).get_account(user_id).await?;
        let addresses = AddressRepository::new(self.db).list_by_user(user_id).await?;

        Ok(ShippingOptions {
            addresses,
            primary_address_id: user.primary_address_id,
        })
    }

    /// Records the shipping address, creating it first when a new address was submitted.
    ///
    /// # Returns
    /// - `Ok(Transition)` - Onward to the payment step
    /// - `Err(AppError::BadRequest)` / `Err(AppError::NotFound)` - Invalid or unknown address
    /// - `Err(AppError::Forbidden)` - Address belongs to another user
    pub async fn submit_shipping(
        &self,
        session: &mut CheckoutSession,
        user_id: i32,
        choice: AddressChoice,
    ) -> Result<Transition, AppError> {
        let txn = self.db.begin().await?;
        let address = resolve_address_choice(&txn, user_id, choice).await?;
        txn.commit().await?;

        tracing::info!("User {} chose shipping address {}", user_id, address.id);

        Ok(session.record_shipping(address.id))
    }

    pub async fn payment_options(&self, user_id: i32) -> Result<PaymentOptions, AppError> {
        let user = AccountService::new(self.db).get_account(user_id).await?;
        let cards = CardRepository::new(self.db).list_by_user(user_id).await?;
        let addresses = AddressRepository::new(self.db).list_by_user(user_id).await?;

        Ok(PaymentOptions {
            cards,
            addresses,
            primary_payment_id: user.primary_payment_id,
        })
    }

    /// Records the payment method and its billing address.
    ///
    /// A new card and a new billing address are created together in one transaction.
    ///
    /// # Returns
    /// - `Ok(Transition)` - Onward to review
    /// - `Err(AppError::BadRequest)` / `Err(AppError::NotFound)` - Invalid or unknown card or address
    /// - `Err(AppError::Forbidden)` - Card or address belongs to another user
    pub async fn submit_payment(
        &self,
        session: &mut CheckoutSession,
        user_id: i32,
        choice: PaymentChoice,
    ) -> Result<Transition, AppError> {
        let txn = self.db.begin().await?;
        let card = resolve_payment_choice(&txn, user_id, choice).await?;
        txn.commit().await?;

        tracing::info!(
            "User {} chose payment {} billed to address {}",
            user_id,
            card.id,
            card.billing_address_id
        );

        Ok(session.record_payment(card.billing_address_id, card.id))
    }
}
