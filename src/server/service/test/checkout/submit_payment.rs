use super::*;
use crate::server::{
    data::card::CardRepository,
    model::payment::{CreatePaymentParam, NewCardParam, PaymentChoice},
};
use chrono::{Datelike, Utc};

fn new_card() -> NewCardParam {
    NewCardParam {
        cardholder_name: "Grace Hopper".to_string(),
        card_number: "4111111111111111".to_string(),
        exp_month: 12,
        exp_year: Utc::now().year() + 2,
        cvv: "123".to_string(),
    }
}

/// Tests paying with a saved card and no billing override.
///
/// Expected: session records the card and its own billing address, routed to review
#[tokio::test]
async fn saved_card_keeps_its_billing_address() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_checkout_fixture(db, 1).await?;

    let mut session = CheckoutSession::default();
    let transition = CheckoutService::new(db)
        .submit_payment(
            &mut session,
            fixture.user.id,
            PaymentChoice::Existing {
                payment_id: fixture.card.id,
                billing: None,
            },
        )
        .await?;

    assert_eq!(transition, Transition::Advance(CheckoutStep::Review));
    assert_eq!(session.payment_id, Some(fixture.card.id));
    assert_eq!(session.billing_address_id, Some(fixture.address.id));

    Ok(())
}

/// Tests paying with a saved card billed to a newly entered address.
///
/// Expected: new address created and stored as the card's billing address
#[tokio::test]
async fn saved_card_with_new_billing_address() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_checkout_fixture(db, 1).await?;

    let mut session = CheckoutSession::default();
    CheckoutService::new(db)
        .submit_payment(
            &mut session,
            fixture.user.id,
            PaymentChoice::Existing {
                payment_id: fixture.card.id,
                billing: Some(AddressChoice::New(new_address("22202"))),
            },
        )
        .await?;

    let billing_id = session.billing_address_id.unwrap();
    assert_ne!(billing_id, fixture.address.id);

    let card = CardRepository::new(db)
        .find_by_id(fixture.card.id)
        .await?
        .unwrap();
    assert_eq!(card.billing_address_id, billing_id);

    Ok(())
}

/// Tests paying with a new card billed to a saved address.
///
/// Expected: card stored for the user and recorded on the session
#[tokio::test]
async fn new_card_with_saved_address() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let address = factory::create_address(db, user.id).await?;

    let mut session = CheckoutSession::default();
    CheckoutService::new(db)
        .submit_payment(
            &mut session,
            user.id,
            PaymentChoice::New(CreatePaymentParam {
                card: new_card(),
                billing: AddressChoice::Existing(address.id),
            }),
        )
        .await?;

    let cards = CardRepository::new(db).list_by_user(user.id).await?;
    assert_eq!(cards.len(), 1);
    assert_eq!(session.payment_id, Some(cards[0].id));
    assert_eq!(session.billing_address_id, Some(address.id));

    Ok(())
}

/// Tests a new card that fails validation, submitted with a new billing address.
///
/// Expected: Err(BadRequest) and neither the card nor the address is stored
#[tokio::test]
async fn invalid_card_writes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let mut card = new_card();
    card.card_number = "1234".to_string();

    let mut session = CheckoutSession {
        shipping_address_id: Some(7),
        ..CheckoutSession::default()
    };
    let result = CheckoutService::new(db)
        .submit_payment(
            &mut session,
            user.id,
            PaymentChoice::New(CreatePaymentParam {
                card,
                billing: AddressChoice::New(new_address("22202")),
            }),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(session.shipping_address_id, Some(7));
    assert_eq!(session.payment_id, None);
    assert!(CardRepository::new(db).list_by_user(user.id).await?.is_empty());

    Ok(())
}

/// Tests choosing another user's card.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn rejects_foreign_card() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_checkout_fixture(db, 1).await?;
    let intruder = factory::create_user(db).await?;

    let mut session = CheckoutSession::default();
    let result = CheckoutService::new(db)
        .submit_payment(
            &mut session,
            intruder.id,
            PaymentChoice::Existing {
                payment_id: fixture.card.id,
                billing: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}
