use serde::{Deserialize, Serialize};

use crate::model::{
    address::{AddressChoiceDto, AddressDto},
    cart::CartDto,
    payment::{CardDto, NewCardDto},
};

/// Body of `POST /checkout/shipping`.
pub type ShippingSubmissionDto = AddressChoiceDto;

/// Body of `POST /checkout/payment`.
///
/// `billing` may be omitted for a saved card, in which case the card keeps its own billing
/// address.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum PaymentSubmissionDto {
    Existing {
        payment_id: i32,
        #[serde(default)]
        billing: Option<AddressChoiceDto>,
    },
    New {
        card: NewCardDto,
        billing: AddressChoiceDto,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AuthStepDto {
    pub step: String,
    pub cart: CartDto,
    pub flash: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ShippingStepDto {
    pub step: String,
    pub addresses: Vec<AddressDto>,
    pub primary_address_id: Option<i32>,
    pub selected_address_id: Option<i32>,
    pub flash: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PaymentStepDto {
    pub step: String,
    pub cards: Vec<CardDto>,
    pub addresses: Vec<AddressDto>,
    pub primary_payment_id: Option<i32>,
    pub flash: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReviewDto {
    pub cart: CartDto,
    pub shipping_address: AddressDto,
    pub billing_address: AddressDto,
    pub payment: CardDto,
}
