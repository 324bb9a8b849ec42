//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They validate domain
//! parameters, enforce ownership, and own every transaction boundary: operations touching
//! more than one row run inside `TransactionTrait::begin` / `commit`, with the repositories
//! executing against the open transaction. Services never touch the HTTP session; they
//! return the values the controller records there once the transaction has committed.

pub mod account;
pub mod address;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod identity;
pub mod order;
pub mod payment;
pub mod product;

#[cfg(test)]
mod test;
