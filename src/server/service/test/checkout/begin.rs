use super::*;
use crate::server::data::cart::CartRepository;

/// Tests starting checkout anonymously with a filled guest cart.
///
/// Expected: routed to the auth step, session keeps the cart
#[tokio::test]
async fn anonymous_caller_goes_to_auth() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    let cart = factory::create_cart(db, None).await?;
    factory::create_cart_item(db, cart.id, product.id, 1).await?;

    let mut session = CheckoutSession {
        cart_id: Some(cart.id),
        ..CheckoutSession::default()
    };
    let transition = CheckoutService::new(db).begin(&mut session, None).await?;

    assert_eq!(transition, Transition::Advance(CheckoutStep::Auth));
    assert_eq!(session.cart_id, Some(cart.id));

    Ok(())
}

/// Tests starting checkout signed in while the session still holds a guest cart.
///
/// Expected: routed to shipping, guest cart consolidated into the user's cart
#[tokio::test]
async fn authenticated_caller_skips_auth_and_claims_cart() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;
    let cart = factory::create_cart(db, None).await?;
    factory::create_cart_item(db, cart.id, product.id, 1).await?;

    let mut session = CheckoutSession {
        cart_id: Some(cart.id),
        ..CheckoutSession::default()
    };
    let transition = CheckoutService::new(db)
        .begin(&mut session, Some(user.id))
        .await?;

    assert_eq!(transition, Transition::Advance(CheckoutStep::Shipping));
    assert_eq!(session.cart_id, Some(cart.id));

    let record = CartRepository::new(db).find_by_id(cart.id).await?.unwrap();
    assert_eq!(record.user_id, Some(user.id));

    Ok(())
}

/// Tests starting checkout without any cart.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_without_cart() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut session = CheckoutSession::default();
    let result = CheckoutService::new(db).begin(&mut session, None).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests starting checkout with a cart that has no lines.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_with_empty_cart() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cart = factory::create_cart(db, None).await?;

    let mut session = CheckoutSession {
        cart_id: Some(cart.id),
        ..CheckoutSession::default()
    };
    let result = CheckoutService::new(db).begin(&mut session, None).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
