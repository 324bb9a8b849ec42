use super::*;
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests placing an order for two units of a 10.00 product.
///
/// Expected: total of 2000 cents, exactly one order line with quantity 2, cart deleted
#[tokio::test]
async fn snapshots_cart_into_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_checkout_fixture(db, 2).await?;

    let order = OrderService::new(db).place(bundle(&fixture)).await?;

    assert_eq!(order.total_cents, 2_000);
    assert_eq!(order.user_id, fixture.user.id);

    let items = OrderRepository::new(db).items(order.id).await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product_id, fixture.product.id);
    assert_eq!(items[0].quantity, 2);
    assert_eq!(items[0].unit_price_cents, 1_000);

    assert!(CartRepository::new(db)
        .find_by_id(fixture.cart.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests that a failing order line insert rolls back the whole order.
///
/// The order line table is left out of the schema so the first line insert fails.
///
/// Expected: Err, no order row, cart and its lines still present
#[tokio::test]
async fn rolls_back_order_when_item_insert_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Product)
        .with_table(Address)
        .with_table(Card)
        .with_table(Cart)
        .with_table(CartItem)
        .with_table(Order)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_checkout_fixture(db, 2).await?;

    let result = OrderService::new(db).place(bundle(&fixture)).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(Order::find().count(db).await?, 0);

    let cart_repo = CartRepository::new(db);
    assert!(cart_repo.find_by_id(fixture.cart.id).await?.is_some());
    assert_eq!(cart_repo.items(fixture.cart.id).await?.len(), 1);

    Ok(())
}

/// Tests placing an order from a cart owned by another user.
///
/// Expected: Err(Forbidden) and no order row
#[tokio::test]
async fn rejects_foreign_cart() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_checkout_fixture(db, 1).await?;
    let other = factory::helpers::create_checkout_fixture(db, 1).await?;

    let mut tampered = bundle(&fixture);
    tampered.cart_id = other.cart.id;

    let result = OrderService::new(db).place(tampered).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert_eq!(Order::find().count(db).await?, 0);

    Ok(())
}

/// Tests placing an order with another user's shipping address.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn rejects_foreign_address() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_checkout_fixture(db, 1).await?;
    let other = factory::helpers::create_checkout_fixture(db, 1).await?;

    let mut tampered = bundle(&fixture);
    tampered.shipping_address_id = other.address.id;

    let result = OrderService::new(db).place(tampered).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests placing an order with a card that no longer exists.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_card() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_checkout_fixture(db, 1).await?;

    let mut stale = bundle(&fixture);
    stale.payment_id = fixture.card.id + 1_000;

    let result = OrderService::new(db).place(stale).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests placing an order from a cart without lines.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_empty_cart() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_checkout_fixture(db, 1).await?;
    CartRepository::new(db)
        .delete_item(fixture.cart.id, fixture.product.id)
        .await?;

    let result = OrderService::new(db).place(bundle(&fixture)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
