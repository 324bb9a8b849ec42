use crate::server::{
    error::AppError,
    model::{
        address::{AddressChoice, AddressParam},
        checkout::{CheckoutSession, CheckoutStep, Transition},
    },
    service::checkout::CheckoutService,
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::CheckoutFixture},
};

mod begin;
mod review;
mod submit_payment;
mod submit_shipping;

/// Session after the shipping and payment steps have been completed with the fixture's rows.
fn completed_session(fixture: &CheckoutFixture) -> CheckoutSession {
    CheckoutSession {
        cart_id: Some(fixture.cart.id),
        shipping_address_id: Some(fixture.address.id),
        billing_address_id: Some(fixture.address.id),
        payment_id: Some(fixture.card.id),
        order_id: None,
    }
}

fn new_address(zip: &str) -> AddressParam {
    AddressParam {
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        address1: "1 Navy Way".to_string(),
        address2: None,
        city: "Arlington".to_string(),
        state: "VA".to_string(),
        zip: zip.to_string(),
        country: "US".to_string(),
    }
}
