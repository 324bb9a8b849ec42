//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entities into these types at the data boundary, services work
//! exclusively with them, and controllers convert them into API DTOs with `into_dto`.

pub mod address;
pub mod cart;
pub mod checkout;
pub mod order;
pub mod payment;
pub mod product;
pub mod user;
