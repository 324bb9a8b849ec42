//! Address book management.
//!
//! Besides the CRUD operations used by the account API, this module exposes the ownership
//! helpers the checkout and the order materializer run inside their own transactions.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{address::AddressRepository, card::CardRepository, user::UserRepository},
    error::AppError,
    model::address::{Address, AddressChoice, AddressParam},
};

pub struct AddressService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AddressService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, user_id: i32) -> Result<Vec<Address>, AppError> {
        let address_repo = AddressRepository::new(self.db);
        Ok(address_repo.list_by_user(user_id).await?)
    }

    pub async fn get(&self, user_id: i32, address_id: i32) -> Result<Address, AppError> {
        find_owned_address(self.db, user_id, address_id).await
    }

    pub async fn create(&self, user_id: i32, param: AddressParam) -> Result<Address, AppError> {
        param.validate()?;

        let address_repo = AddressRepository::new(self.db);
        let address = address_repo.create(user_id, param).await?;

        tracing::debug!("User {} added address {}", user_id, address.id);
        Ok(address)
    }

    /// Replaces every field of an owned address.
    ///
    /// # Returns
    /// - `Ok(Address)` - The updated address
    /// - `Err(AppError::BadRequest)` - Payload failed validation
    /// - `Err(AppError::NotFound)` - No such address
    /// - `Err(AppError::Forbidden)` - Address belongs to another user
    pub async fn update(
        &self,
        user_id: i32,
        address_id: i32,
        param: AddressParam,
    ) -> Result<Address, AppError> {
        param.validate()?;
        find_owned_address(self.db, user_id, address_id).await?;

        let address_repo = AddressRepository::new(self.db);
        Ok(address_repo.update(address_id, param).await?)
    }

    /// Deletes an owned address and clears it as the user's primary address.
    ///
    /// # Returns
    /// - `Ok(())` - Address deleted
    /// - `Err(AppError::NotFound)` - No such address
    /// - `Err(AppError::Forbidden)` - Address belongs to another user
    /// - `Err(AppError::Conflict)` - A saved card still bills to this address
    pub async fn delete(&self, user_id: i32, address_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        find_owned_address(&txn, user_id, address_id).await?;

        let billed_cards = CardRepository::new(&txn)
            .count_by_billing_address(address_id)
            .await?;
        if billed_cards > 0 {
            return Err(AppError::Conflict(
                "Address is the billing address of a saved card".to_string(),
            ));
        }

        UserRepository::new(&txn)
            .clear_primary_address(user_id, address_id)
            .await?;
        AddressRepository::new(&txn).delete(address_id).await?;

        txn.commit().await?;

        tracing::debug!("User {} deleted address {}", user_id, address_id);
        Ok(())
    }
}

/// Loads an address and checks that `user_id` owns it.
///
/// # Returns
/// - `Ok(Address)` - The owned address
/// - `Err(AppError::NotFound)` - No such address
/// - `Err(AppError::Forbidden)` - Address belongs to another user
pub async fn find_owned_address<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    address_id: i32,
) -> Result<Address, AppError> {
    let address = AddressRepository::new(db)
        .find_by_id(address_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Address {} not found", address_id)))?;

    if address.user_id != user_id {
        return Err(AppError::Forbidden(
            "Address belongs to another user".to_string(),
        ));
    }

    Ok(address)
}

/// Turns an address choice into a stored address: an existing one is ownership-checked, a
/// new one is validated and created for the user.
pub async fn resolve_address_choice<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    choice: AddressChoice,
) -> Result<Address, AppError> {
    match choice {
        AddressChoice::Existing(address_id) => find_owned_address(db, user_id, address_id).await,
        AddressChoice::New(param) => {
            param.validate()?;
            Ok(AddressRepository::new(db).create(user_id, param).await?)
        }
    }
}
