use super::*;
use crate::server::data::address::AddressRepository;

/// Tests submitting a new shipping address.
///
/// Expected: address created for the user, recorded on the session, routed to payment
#[tokio::test]
async fn creates_and_records_new_address() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let mut session = CheckoutSession::default();
    let transition = CheckoutService::new(db)
        .submit_shipping(&mut session, user.id, AddressChoice::New(new_address("22202")))
        .await?;

    assert_eq!(transition, Transition::Advance(CheckoutStep::Payment));

    let addresses = AddressRepository::new(db).list_by_user(user.id).await?;
    assert_eq!(addresses.len(), 1);
    assert_eq!(session.shipping_address_id, Some(addresses[0].id));

    Ok(())
}

/// Tests submitting a new address that fails validation.
///
/// Expected: Err(BadRequest), session untouched, nothing stored
#[tokio::test]
async fn invalid_address_leaves_session_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let mut session = CheckoutSession::default();
    let result = CheckoutService::new(db)
        .submit_shipping(&mut session, user.id, AddressChoice::New(new_address("!")))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(session, CheckoutSession::default());
    assert!(AddressRepository::new(db).list_by_user(user.id).await?.is_empty());

    Ok(())
}

/// Tests choosing another user's saved address.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn rejects_foreign_address() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let foreign = factory::create_address(db, other.id).await?;

    let mut session = CheckoutSession::default();
    let result = CheckoutService::new(db)
        .submit_shipping(&mut session, user.id, AddressChoice::Existing(foreign.id))
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert_eq!(session.shipping_address_id, None);

    Ok(())
}
