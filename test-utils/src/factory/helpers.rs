//! Shared helpers for the factory modules.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Rows needed to place an order for one customer.
pub struct CheckoutFixture {
    pub user: entity::user::Model,
    pub address: entity::address::Model,
    pub card: entity::card::Model,
    pub product: entity::product::Model,
    pub cart: entity::cart::Model,
}

/// Creates a customer with an address, a card billed to that address and an owned cart
/// holding `quantity` units of a fresh product.
///
/// Requires the tables from `TestBuilder::with_shop_tables`.
pub async fn create_checkout_fixture(
    db: &DatabaseConnection,
    quantity: i32,
) -> Result<CheckoutFixture, DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let address = crate::factory::address::create_address(db, user.id).await?;
    let card = crate::factory::card::create_card(db, user.id, address.id).await?;
    let product = crate::factory::product::create_product(db).await?;
    let cart = crate::factory::cart::create_cart(db, Some(user.id)).await?;
    crate::factory::cart::create_cart_item(db, cart.id, product.id, quantity).await?;

    Ok(CheckoutFixture {
        user,
        address,
        card,
        product,
        cart,
    })
}
