//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM queries for one aggregate each and convert entity models into
//! domain models at this boundary. Every repository is generic over `ConnectionTrait`, so
//! services can run the same repository against the connection pool or inside a transaction.

pub mod address;
pub mod card;
pub mod cart;
pub mod order;
pub mod product;
pub mod user;

#[cfg(test)]
mod test;
