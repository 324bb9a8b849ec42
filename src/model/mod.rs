//! Request and response bodies exchanged with API clients.

pub mod address;
pub mod api;
pub mod cart;
pub mod checkout;
pub mod order;
pub mod payment;
pub mod product;
pub mod user;
