//! SeaORM entity definitions for the storefront schema.

pub mod prelude;

pub mod address;
pub mod card;
pub mod cart;
pub mod cart_item;
pub mod order;
pub mod order_item;
pub mod product;
pub mod user;
