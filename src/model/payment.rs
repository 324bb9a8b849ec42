use serde::{Deserialize, Serialize};

use crate::model::address::AddressChoiceDto;

/// Stored card as seen by clients.
///
/// `card_number` only carries the last four digits and `cvv` is always `"***"`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CardDto {
    pub id: i32,
    pub cardholder_name: String,
    pub card_number: String,
    pub exp_month: i32,
    pub exp_year: i32,
    pub cvv: String,
    pub billing_address_id: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct NewCardDto {
    #[serde(default)]
    pub cardholder_name: String,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub exp_month: i32,
    #[serde(default)]
    pub exp_year: i32,
    #[serde(default)]
    pub cvv: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreatePaymentDto {
    pub card: NewCardDto,
    pub billing: AddressChoiceDto,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SetPrimaryPaymentDto {
    pub payment_id: i32,
}
