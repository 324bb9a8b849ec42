//! Checkout state machine.
//!
//! The checkout is driven by a [`CheckoutSession`] stored in the server-side session. Each
//! step records the id it produced; the functions here decide, from that value and whether
//! the caller is authenticated, where the customer goes next. They perform no I/O so the
//! routing rules can be tested on their own.

use serde::{Deserialize, Serialize};

use crate::{
    model::checkout::ReviewDto,
    server::{
        error::AppError,
        model::{address::Address, cart::Cart, payment::Card},
    },
};

/// Selections collected across checkout requests.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckoutSession {
    pub cart_id: Option<i32>,
    pub shipping_address_id: Option<i32>,
    pub billing_address_id: Option<i32>,
    pub payment_id: Option<i32>,
    pub order_id: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStep {
    Start,
    Auth,
    Shipping,
    Payment,
    Review,
    Placed,
}

impl CheckoutStep {
    pub fn path(self) -> &'static str {
        match self {
            Self::Start => "/checkout",
            Self::Auth => "/checkout/auth",
            Self::Shipping => "/checkout/shipping",
            Self::Payment => "/checkout/payment",
            Self::Review => "/checkout/order",
            Self::Placed => "/checkout/order/confirmation",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Auth => "auth",
            Self::Shipping => "shipping",
            Self::Payment => "payment",
            Self::Review => "review",
            Self::Placed => "placed",
        }
    }
}

pub const CART_PATH: &str = "/cart";

/// Where a checkout request sends the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Step succeeded; continue to the given step.
    Advance(CheckoutStep),
    /// Required data is missing or invalid; return to the step that produces it.
    Back(CheckoutStep),
    /// No usable cart; return to the cart page.
    ToCart,
}

impl Transition {
    pub fn location(self) -> &'static str {
        match self {
            Self::Advance(step) | Self::Back(step) => step.path(),
            Self::ToCart => CART_PATH,
        }
    }
}

/// The four ids review and placement depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewIds {
    pub cart_id: i32,
    pub shipping_address_id: i32,
    pub billing_address_id: i32,
    pub payment_id: i32,
}

impl CheckoutSession {
    /// Entry transition once a non-empty cart has been confirmed.
    pub fn entry(authenticated: bool) -> Transition {
        if authenticated {
            Transition::Advance(CheckoutStep::Shipping)
        } else {
            Transition::Advance(CheckoutStep::Auth)
        }
    }

    /// Collects the ids needed to review or place the order.
    ///
    /// # Returns
    /// - `Ok(ReviewIds)` - Every step has produced its id
    /// - `Err(Transition)` - Route back to the step that produces the first missing id
    pub fn review_ids(&self) -> Result<ReviewIds, Transition> {
        let cart_id = self.cart_id.ok_or(Transition::ToCart)?;
        let shipping_address_id = self
            .shipping_address_id
            .ok_or(Transition::Back(CheckoutStep::Shipping))?;
        let (Some(billing_address_id), Some(payment_id)) =
            (self.billing_address_id, self.payment_id)
        else {
            return Err(Transition::Back(CheckoutStep::Payment));
        };

        Ok(ReviewIds {
            cart_id,
            shipping_address_id,
            billing_address_id,
            payment_id,
        })
    }

    /// Drops every selection except the cart.
    pub fn reset_selections(&mut self) {
        *self = Self {
            cart_id: self.cart_id,
            ..Self::default()
        };
    }

    pub fn record_cart(&mut self, cart_id: Option<i32>) {
        self.cart_id = cart_id;
    }

    pub fn record_shipping(&mut self, address_id: i32) -> Transition {
        self.shipping_address_id = Some(address_id);
        Transition::Advance(CheckoutStep::Payment)
    }

    pub fn record_payment(&mut self, billing_address_id: i32, payment_id: i32) -> Transition {
        self.billing_address_id = Some(billing_address_id);
        self.payment_id = Some(payment_id);
        Transition::Advance(CheckoutStep::Review)
    }

    /// Moves to the terminal state: the cart and selections are consumed, only the order id
    /// remains for the confirmation page.
    pub fn record_order(&mut self, order_id: i32) -> Transition {
        *self = Self {
            order_id: Some(order_id),
            ..Self::default()
        };
        Transition::Advance(CheckoutStep::Placed)
    }
}

/// Steps at or after shipping require an identity; anonymous callers go back to the entry.
pub const ANONYMOUS_REDIRECT: Transition = Transition::Back(CheckoutStep::Start);

/// Everything the customer confirms before placing the order.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutReview {
    pub cart: Cart,
    pub shipping_address: Address,
    pub billing_address: Address,
    pub payment: Card,
}

impl CheckoutReview {
    pub fn into_dto(self) -> Result<ReviewDto, AppError> {
        Ok(ReviewDto {
            cart: self.cart.into_dto()?,
            shipping_address: self.shipping_address.into_dto(),
            billing_address: self.billing_address.into_dto(),
            payment: self.payment.into_dto(),
        })
    }
}

/// Saved addresses offered by the shipping step.
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingOptions {
    pub addresses: Vec<Address>,
    pub primary_address_id: Option<i32>,
}

/// Saved cards and addresses offered by the payment step.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentOptions {
    pub cards: Vec<Card>,
    pub addresses: Vec<Address>,
    pub primary_payment_id: Option<i32>,
}
