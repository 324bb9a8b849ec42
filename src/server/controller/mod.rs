//! HTTP request handlers.
//!
//! Handlers apply an access policy through `AuthGuard`, convert DTOs into params, call a
//! service and convert the result back into a DTO. The checkout handlers answer with
//! redirects between steps instead of JSON errors for recoverable input.

pub mod account;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod product;
