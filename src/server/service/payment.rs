//! Saved payment methods.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{card::CardRepository, user::UserRepository},
    error::AppError,
    model::payment::{Card, CreatePaymentParam, PaymentChoice},
    service::address::resolve_address_choice,
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, user_id: i32) -> Result<Vec<Card>, AppError> {
        let card_repo = CardRepository::new(self.db);
        Ok(card_repo.list_by_user(user_id).await?)
    }

    pub async fn get(&self, user_id: i32, payment_id: i32) -> Result<Card, AppError> {
        find_owned_card(self.db, user_id, payment_id).await
    }

    /// Saves a new card. A new billing address is created in the same transaction.
    ///
    /// # Returns
    /// - `Ok(Card)` - The stored card
    /// - `Err(AppError::BadRequest)` - Card or address failed validation
    /// - `Err(AppError::NotFound)` / `Err(AppError::Forbidden)` - Billing address not usable
    pub async fn create(&self, user_id: i32, param: CreatePaymentParam) -> Result<Card, AppError> {
        let txn = self.db.begin().await?;

        let card = create_card(&txn, user_id, param).await?;

        txn.commit().await?;

        tracing::debug!("User {} added payment {}", user_id, card.id);
        Ok(card)
    }

    /// Deletes an owned card and clears it as the user's primary payment.
    pub async fn delete(&self, user_id: i32, payment_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        find_owned_card(&txn, user_id, payment_id).await?;

        UserRepository::new(&txn)
            .clear_primary_payment(user_id, payment_id)
            .await?;
        CardRepository::new(&txn).delete(payment_id).await?;

        txn.commit().await?;

        tracing::debug!("User {} deleted payment {}", user_id, payment_id);
        Ok(())
    }
}

/// Loads a card and checks that `user_id` owns it.
///
/// # Returns
/// - `Ok(Card)` - The owned card
/// - `Err(AppError::NotFound)` - No such card
/// - `Err(AppError::Forbidden)` - Card belongs to another user
pub async fn find_owned_card<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    payment_id: i32,
) -> Result<Card, AppError> {
    let card = CardRepository::new(db)
        .find_by_id(payment_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Payment method {} not found", payment_id)))?;

    if card.user_id != user_id {
        return Err(AppError::Forbidden(
            "Payment method belongs to another user".to_string(),
        ));
    }

    Ok(card)
}

/// Turns a payment choice into a stored card whose billing address is settled.
///
/// For a saved card, a supplied billing address replaces the card's own when it differs;
/// without one the card keeps its billing address.
pub async fn resolve_payment_choice<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    choice: PaymentChoice,
) -> Result<Card, AppError> {
    match choice {
        PaymentChoice::Existing {
            payment_id,
            billing,
        } => {
            let mut card = find_owned_card(db, user_id, payment_id).await?;

            if let Some(billing) = billing {
                let address = resolve_address_choice(db, user_id, billing).await?;
                if address.id != card.billing_address_id {
                    CardRepository::new(db)
                        .set_billing_address(card.id, address.id)
                        .await?;
                    card.billing_address_id = address.id;
                }
            }

            Ok(card)
        }
        PaymentChoice::New(param) => create_card(db, user_id, param).await,
    }
}

async fn create_card<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    param: CreatePaymentParam,
) -> Result<Card, AppError> {
    // Validate the card before any address row gets written
    param.card.validate()?;

    let billing = resolve_address_choice(db, user_id, param.billing).await?;

    Ok(CardRepository::new(db)
        .create(user_id, param.card, billing.id)
        .await?)
}
