use super::*;

/// Tests that an authenticated caller's own cart wins over the session cart.
///
/// Expected: the user's cart
#[tokio::test]
async fn prefers_users_own_cart() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let owned = factory::create_cart(db, Some(user.id)).await?;
    let anonymous = factory::create_cart(db, None).await?;

    let record = CartService::new(db)
        .resolve(member(user.id, Some(anonymous.id)))
        .await?;

    assert_eq!(record.map(|cart| cart.id), Some(owned.id));

    Ok(())
}

/// Tests resolving a session cart owned by somebody else.
///
/// Expected: no cart for the anonymous caller
#[tokio::test]
async fn ignores_session_cart_owned_by_another_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let other = factory::create_user(db).await?;
    let cart = factory::create_cart(db, Some(other.id)).await?;

    let record = CartService::new(db).resolve(guest(Some(cart.id))).await?;

    assert!(record.is_none());

    Ok(())
}

/// Tests resolving a session cart id whose cart was deleted.
///
/// Expected: no cart
#[tokio::test]
async fn ignores_deleted_session_cart() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cart = factory::create_cart(db, None).await?;
    CartRepository::new(db).delete(cart.id).await?;

    let record = CartService::new(db).get(guest(Some(cart.id))).await?;

    assert!(record.is_none());

    Ok(())
}
