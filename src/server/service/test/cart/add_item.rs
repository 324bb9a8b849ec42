use super::*;

/// Tests the first add for an anonymous caller.
///
/// Expected: a new anonymous cart holding one line
#[tokio::test]
async fn creates_anonymous_cart_on_first_add() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;

    let cart = CartService::new(db)
        .add_item(guest(None), product.id, 2)
        .await?;

    assert_eq!(cart.user_id, None);
    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.num_items(), 2);

    Ok(())
}

/// Tests adding the same product twice through the session cart.
///
/// Expected: one line with the summed quantity, in the same cart
#[tokio::test]
async fn accumulates_repeat_adds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::create_product_with_price(db, 250).await?;
    let service = CartService::new(db);

    let first = service.add_item(guest(None), product.id, 1).await?;
    let second = service
        .add_item(guest(Some(first.id)), product.id, 3)
        .await?;

    assert_eq!(second.id, first.id);
    assert_eq!(second.lines.len(), 1);
    assert_eq!(second.lines[0].quantity, 4);
    assert_eq!(second.total_cents()?, 1_000);

    Ok(())
}

/// Tests the first add for an authenticated caller.
///
/// Expected: the new cart is owned by the user
#[tokio::test]
async fn creates_owned_cart_for_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;

    let cart = CartService::new(db)
        .add_item(member(user.id, None), product.id, 1)
        .await?;

    assert_eq!(cart.user_id, Some(user.id));

    Ok(())
}

/// Tests rejecting a zero quantity.
///
/// Expected: Err(BadRequest) and no cart created
#[tokio::test]
async fn rejects_quantity_below_one() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;

    let result = CartService::new(db)
        .add_item(member(user.id, None), product.id, 0)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(CartRepository::new(db).count_by_user(user.id).await?, 0);

    Ok(())
}

/// Tests adding a product that does not exist.
///
/// Expected: Err(NotFound) and no cart created
#[tokio::test]
async fn rejects_unknown_product() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = CartService::new(db)
        .add_item(member(user.id, None), 999_999, 1)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(CartRepository::new(db).count_by_user(user.id).await?, 0);

    Ok(())
}
