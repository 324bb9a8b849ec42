//! Account profile and primary address/payment references.
//!
//! The primary ids on the user row are weak references: the address or card may have been
//! removed since, so reads report a primary id only while its row still exists.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{address::AddressRepository, card::CardRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{UpdateAccountParam, User},
    service::{address::find_owned_address, payment::find_owned_card},
};

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user with primary references that still point at existing rows.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::AuthErr(InvalidToken))` - The user no longer exists
    pub async fn get_account(&self, user_id: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(mut user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::InvalidToken(format!("User {} no longer exists", user_id)).into());
        };

        if let Some(address_id) = user.primary_address_id {
            let exists = AddressRepository::new(self.db)
                .find_by_id(address_id)
                .await?
                .is_some_and(|address| address.user_id == user_id);
            if !exists {
                user.primary_address_id = None;
            }
        }

        if let Some(payment_id) = user.primary_payment_id {
            let exists = CardRepository::new(self.db)
                .find_by_id(payment_id)
                .await?
                .is_some_and(|card| card.user_id == user_id);
            if !exists {
                user.primary_payment_id = None;
            }
        }

        Ok(user)
    }

    pub async fn update(&self, user_id: i32, param: UpdateAccountParam) -> Result<User, AppError> {
        param.validate()?;

        let user_repo = UserRepository::new(self.db);
        user_repo
            .update_name(user_id, param.first_name, param.last_name)
            .await?;

        self.get_account(user_id).await
    }

    /// Marks an owned address as the user's primary address.
    ///
    /// # Returns
    /// - `Ok(User)` - The user with the new primary reference
    /// - `Err(AppError::NotFound)` - No such address
    /// - `Err(AppError::Forbidden)` - Address belongs to another user
    pub async fn set_primary_address(&self, user_id: i32, address_id: i32) -> Result<User, AppError> {
        find_owned_address(self.db, user_id, address_id).await?;

        UserRepository::new(self.db)
            .set_primary_address(user_id, Some(address_id))
            .await?;

        self.get_account(user_id).await
    }

    /// Marks an owned card as the user's primary payment.
    pub async fn set_primary_payment(&self, user_id: i32, payment_id: i32) -> Result<User, AppError> {
        find_owned_card(self.db, user_id, payment_id).await?;

        UserRepository::new(self.db)
            .set_primary_payment(user_id, Some(payment_id))
            .await?;

        self.get_account(user_id).await
    }
}
