//! Factory methods for creating test data.
//!
//! Each entity has a `*Factory` builder for customised rows and a `create_*` shorthand for the
//! defaults. Factories do not create the rows they reference; pass the parent ids explicitly or
//! use the [`helpers`] functions that build a whole dependency chain.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let address = factory::create_address(&db, user.id).await?;
//! let card = factory::create_card(&db, user.id, address.id).await?;
//!
//! let product = factory::product::ProductFactory::new(&db)
//!     .name("Kettle")
//!     .price_cents(2_499)
//!     .build()
//!     .await?;
//! ```

pub mod address;
pub mod card;
pub mod cart;
pub mod helpers;
pub mod order;
pub mod product;
pub mod user;

pub use address::create_address;
pub use card::create_card;
pub use cart::{create_cart, create_cart_item};
pub use order::create_order;
pub use product::create_product;
pub use user::create_user;
