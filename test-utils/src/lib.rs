//! Storefront Test Utils
//!
//! Shared helpers for the storefront test suites. Tests describe the tables they need through
//! [`builder::TestBuilder`], receive a [`context::TestContext`] backed by an in-memory SQLite
//! database, and seed rows with the [`factory`] builders.
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn adds_line_to_cart() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let product = factory::create_product(db).await?;
//!     let cart = factory::create_cart(db, None).await?;
//!     factory::create_cart_item(db, cart.id, product.id, 2).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
