use super::*;

/// Tests overwriting the quantity of a line.
///
/// Expected: the line carries the new quantity
#[tokio::test]
async fn overwrites_quantity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    let cart = factory::create_cart(db, None).await?;
    factory::create_cart_item(db, cart.id, product.id, 5).await?;

    let updated = CartService::new(db)
        .set_quantity(guest(Some(cart.id)), product.id, 2)
        .await?
        .unwrap();

    assert_eq!(updated.lines[0].quantity, 2);

    Ok(())
}

/// Tests setting the quantity of the only line to zero.
///
/// Expected: Ok(None) and the cart deleted
#[tokio::test]
async fn zero_removes_line() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    let cart = factory::create_cart(db, None).await?;
    factory::create_cart_item(db, cart.id, product.id, 5).await?;

    let updated = CartService::new(db)
        .set_quantity(guest(Some(cart.id)), product.id, 0)
        .await?;

    assert!(updated.is_none());
    assert!(CartRepository::new(db).find_by_id(cart.id).await?.is_none());

    Ok(())
}

/// Tests updating a product that is not in the cart.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_line() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    let other = factory::create_product(db).await?;
    let cart = factory::create_cart(db, None).await?;
    factory::create_cart_item(db, cart.id, product.id, 1).await?;

    let result = CartService::new(db)
        .set_quantity(guest(Some(cart.id)), other.id, 3)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that a rejected update is rolled back before the cart is used again.
///
/// Expected: the missing line fails, the existing line keeps its quantity and can still be
/// updated on the same connection
#[tokio::test]
async fn rejected_update_releases_transaction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    let other = factory::create_product(db).await?;
    let cart = factory::create_cart(db, None).await?;
    factory::create_cart_item(db, cart.id, product.id, 4).await?;

    let service = CartService::new(db);

    let result = service
        .set_quantity(guest(Some(cart.id)), other.id, 3)
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let item = CartRepository::new(db)
        .find_item(cart.id, product.id)
        .await?
        .unwrap();
    assert_eq!(item.quantity, 4);

    let updated = service
        .set_quantity(guest(Some(cart.id)), product.id, 6)
        .await?
        .unwrap();
    assert_eq!(updated.lines[0].quantity, 6);

    Ok(())
}
