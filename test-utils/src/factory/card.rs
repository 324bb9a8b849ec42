//! Card factory for stored payment methods.

use chrono::{Datelike, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct CardFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    billing_address_id: i32,
    cardholder_name: String,
    card_number: String,
    exp_month: i32,
    exp_year: i32,
    cvv: String,
}

impl<'a> CardFactory<'a> {
    /// Creates a new CardFactory with a test Visa number expiring in December, three years
    /// from now.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, billing_address_id: i32) -> Self {
        Self {
            db,
            user_id,
            billing_address_id,
            cardholder_name: "Test Customer".to_string(),
            card_number: "4111111111111111".to_string(),
            exp_month: 12,
            exp_year: Utc::now().year() + 3,
            cvv: "123".to_string(),
        }
    }

    pub fn card_number(mut self, card_number: impl Into<String>) -> Self {
        self.card_number = card_number.into();
        self
    }

    pub fn expiry(mut self, exp_month: i32, exp_year: i32) -> Self {
        self.exp_month = exp_month;
        self.exp_year = exp_year;
        self
    }

    pub async fn build(self) -> Result<entity::card::Model, DbErr> {
        entity::card::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            cardholder_name: ActiveValue::Set(self.cardholder_name),
            card_number: ActiveValue::Set(self.card_number),
            exp_month: ActiveValue::Set(self.exp_month),
            exp_year: ActiveValue::Set(self.exp_year),
            cvv: ActiveValue::Set(self.cvv),
            billing_address_id: ActiveValue::Set(self.billing_address_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a card owned by `user_id` and billed to `billing_address_id`.
pub async fn create_card(
    db: &DatabaseConnection,
    user_id: i32,
    billing_address_id: i32,
) -> Result<entity::card::Model, DbErr> {
    CardFactory::new(db, user_id, billing_address_id)
        .build()
        .await
}
