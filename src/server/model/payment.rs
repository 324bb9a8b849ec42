//! Stored payment methods.
//!
//! Card numbers and CVVs never leave this module unmasked: `Card` has a redacting `Debug`
//! implementation and `into_dto` masks both fields.

use chrono::{Datelike, Utc};

use crate::{
    model::{
        checkout::PaymentSubmissionDto,
        payment::{CardDto, CreatePaymentDto, NewCardDto},
    },
    server::{error::AppError, model::address::AddressChoice},
};

#[derive(Clone, PartialEq)]
pub struct Card {
    pub id: i32,
    pub user_id: i32,
    pub cardholder_name: String,
    pub card_number: String,
    pub exp_month: i32,
    pub exp_year: i32,
    pub cvv: String,
    pub billing_address_id: i32,
}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Card")
            .field("id", &self.id)
            .field("user_id", &self.user_id)
            .field("card_number", &mask_card_number(&self.card_number))
            .field("billing_address_id", &self.billing_address_id)
            .finish_non_exhaustive()
    }
}

impl Card {
    pub fn from_entity(entity: entity::card::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            cardholder_name: entity.cardholder_name,
            card_number: entity.card_number,
            exp_month: entity.exp_month,
            exp_year: entity.exp_year,
            cvv: entity.cvv,
            billing_address_id: entity.billing_address_id,
        }
    }

    /// Converts to the client representation with the number masked and the CVV redacted.
    pub fn into_dto(self) -> CardDto {
        CardDto {
            id: self.id,
            card_number: mask_card_number(&self.card_number),
            cvv: "***".to_string(),
            cardholder_name: self.cardholder_name,
            exp_month: self.exp_month,
            exp_year: self.exp_year,
            billing_address_id: self.billing_address_id,
        }
    }
}

/// Replaces every character except the last four with `*`.
pub fn mask_card_number(number: &str) -> String {
    let len = number.chars().count();
    number
        .chars()
        .enumerate()
        .map(|(i, c)| if i + 4 < len { '*' } else { c })
        .collect()
}

/// Card details for a new payment method.
#[derive(Clone, PartialEq)]
pub struct NewCardParam {
    pub cardholder_name: String,
    pub card_number: String,
    pub exp_month: i32,
    pub exp_year: i32,
    pub cvv: String,
}

impl std::fmt::Debug for NewCardParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewCardParam")
            .field("card_number", &mask_card_number(&self.card_number))
            .finish_non_exhaustive()
    }
}

impl NewCardParam {
    /// Strips spaces and dashes from the card number.
    pub fn from_dto(dto: NewCardDto) -> Self {
        Self {
            cardholder_name: dto.cardholder_name.trim().to_string(),
            card_number: dto
                .card_number
                .chars()
                .filter(|c| *c != ' ' && *c != '-')
                .collect(),
            exp_month: dto.exp_month,
            exp_year: dto.exp_year,
            cvv: dto.cvv.trim().to_string(),
        }
    }

    /// Validates the card against the current month.
    pub fn validate(&self) -> Result<(), AppError> {
        let today = Utc::now();
        self.validate_at(today.year(), today.month() as i32)
    }

    /// Validates the card as of `year`/`month`.
    ///
    /// # Returns
    /// - `Ok(())` - Card details are acceptable
    /// - `Err(AppError::BadRequest)` - Blank holder, bad number, bad expiry, or bad CVV
    pub fn validate_at(&self, year: i32, month: i32) -> Result<(), AppError> {
        if self.cardholder_name.is_empty() {
            return Err(AppError::BadRequest("Cardholder name is required".to_string()));
        }

        let digits = self.card_number.len();
        if !(13..=19).contains(&digits) || !self.card_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::BadRequest("Card number is not valid".to_string()));
        }

        if !(1..=12).contains(&self.exp_month) {
            return Err(AppError::BadRequest(
                "Expiration month must be between 1 and 12".to_string(),
            ));
        }

        if (self.exp_year, self.exp_month) < (year, month) {
            return Err(AppError::BadRequest("Card has expired".to_string()));
        }

        let cvv_len = self.cvv.len();
        if !(3..=4).contains(&cvv_len) || !self.cvv.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::BadRequest("Security code is not valid".to_string()));
        }

        Ok(())
    }
}

/// New card plus the billing address it is charged to.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePaymentParam {
    pub card: NewCardParam,
    pub billing: AddressChoice,
}

impl CreatePaymentParam {
    pub fn from_dto(dto: CreatePaymentDto) -> Self {
        Self {
            card: NewCardParam::from_dto(dto.card),
            billing: AddressChoice::from_dto(dto.billing),
        }
    }
}

/// Payment step submission: a saved card, optionally re-billed, or a new card.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentChoice {
    Existing {
        payment_id: i32,
        billing: Option<AddressChoice>,
    },
    New(CreatePaymentParam),
}

impl PaymentChoice {
    pub fn from_dto(dto: PaymentSubmissionDto) -> Self {
        match dto {
            PaymentSubmissionDto::Existing {
                payment_id,
                billing,
            } => Self::Existing {
                payment_id,
                billing: billing.map(AddressChoice::from_dto),
            },
            PaymentSubmissionDto::New { card, billing } => Self::New(CreatePaymentParam {
                card: NewCardParam::from_dto(card),
                billing: AddressChoice::from_dto(billing),
            }),
        }
    }
}
