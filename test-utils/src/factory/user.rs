//! User factory for creating test customer accounts.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// The default password hash is not a valid Argon2 hash. Tests that log in must hash a
/// password first and pass it through [`UserFactory::password_hash`].
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    password_hash: String,
    first_name: String,
    last_name: String,
    primary_address_id: Option<i32>,
    primary_payment_id: Option<i32>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"`
    /// - first_name / last_name: `"Test"` / `"User {id}"`
    /// - no primary address or payment
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            password_hash: "unusable-hash".to_string(),
            first_name: "Test".to_string(),
            last_name: format!("User {}", id),
            primary_address_id: None,
            primary_payment_id: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    pub fn primary_address_id(mut self, address_id: i32) -> Self {
        self.primary_address_id = Some(address_id);
        self
    }

    pub fn primary_payment_id(mut self, payment_id: i32) -> Self {
        self.primary_payment_id = Some(payment_id);
        self
    }

    /// Builds and inserts the user entity into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            primary_address_id: ActiveValue::Set(self.primary_address_id),
            primary_payment_id: ActiveValue::Set(self.primary_payment_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
