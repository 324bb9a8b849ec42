//! Address factory for customer address book rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct AddressFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    first_name: String,
    last_name: String,
    address1: String,
    address2: Option<String>,
    city: String,
    state: String,
    zip: String,
    country: String,
}

impl<'a> AddressFactory<'a> {
    /// Creates a new AddressFactory for the given owner with a valid US address.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            first_name: "Test".to_string(),
            last_name: "Customer".to_string(),
            address1: format!("{} Main Street", id),
            address2: None,
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip: "62701".to_string(),
            country: "US".to_string(),
        }
    }

    pub fn address1(mut self, address1: impl Into<String>) -> Self {
        self.address1 = address1.into();
        self
    }

    pub fn address2(mut self, address2: impl Into<String>) -> Self {
        self.address2 = Some(address2.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn zip(mut self, zip: impl Into<String>) -> Self {
        self.zip = zip.into();
        self
    }

    pub async fn build(self) -> Result<entity::address::Model, DbErr> {
        entity::address::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            address1: ActiveValue::Set(self.address1),
            address2: ActiveValue::Set(self.address2),
            city: ActiveValue::Set(self.city),
            state: ActiveValue::Set(self.state),
            zip: ActiveValue::Set(self.zip),
            country: ActiveValue::Set(self.country),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an address owned by `user_id` with default values.
pub async fn create_address(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::address::Model, DbErr> {
    AddressFactory::new(db, user_id).build().await
}
