use super::*;
use crate::server::data::address::AddressRepository;

/// Tests reviewing a completed session twice.
///
/// Expected: identical cart, addresses and payment both times
#[tokio::test]
async fn review_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_checkout_fixture(db, 2).await?;
    let session = completed_session(&fixture);
    let service = CheckoutService::new(db);

    let first = service.review(&session, fixture.user.id).await?.unwrap();
    let second = service.review(&session, fixture.user.id).await?.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.cart.id, fixture.cart.id);
    assert_eq!(first.shipping_address.id, fixture.address.id);
    assert_eq!(first.payment.id, fixture.card.id);
    assert_eq!(first.cart.total_cents()?, 2_000);

    Ok(())
}

/// Tests reviewing with shipping chosen but no payment yet.
///
/// Expected: routed back to the payment step rather than failing
#[tokio::test]
async fn missing_payment_routes_back_to_payment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_checkout_fixture(db, 1).await?;
    let mut session = completed_session(&fixture);
    session.billing_address_id = None;
    session.payment_id = None;

    let result = CheckoutService::new(db)
        .review(&session, fixture.user.id)
        .await?;

    assert_eq!(result, Err(Transition::Back(CheckoutStep::Payment)));

    Ok(())
}

/// Tests reviewing after the chosen shipping address was deleted.
///
/// Expected: routed back to the shipping step
#[tokio::test]
async fn deleted_shipping_address_routes_back_to_shipping() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_checkout_fixture(db, 1).await?;
    let shipping = factory::create_address(db, fixture.user.id).await?;
    let mut session = completed_session(&fixture);
    session.shipping_address_id = Some(shipping.id);

    AddressRepository::new(db).delete(shipping.id).await?;

    let result = CheckoutService::new(db)
        .review(&session, fixture.user.id)
        .await?;

    assert_eq!(result, Err(Transition::Back(CheckoutStep::Shipping)));

    Ok(())
}

/// Tests reviewing a session whose ids point at another user's rows.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn foreign_session_ids_are_forbidden() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_checkout_fixture(db, 1).await?;
    let intruder = factory::create_user(db).await?;

    let result = CheckoutService::new(db)
        .review(&completed_session(&fixture), intruder.id)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}
