use super::*;

/// Tests deleting the user's primary card.
///
/// Expected: card gone and the primary payment cleared
#[tokio::test]
async fn clears_primary_reference() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let address = factory::create_address(db, user.id).await?;
    let card = factory::create_card(db, user.id, address.id).await?;
    UserRepository::new(db)
        .set_primary_payment(user.id, Some(card.id))
        .await?;

    PaymentService::new(db).delete(user.id, card.id).await?;

    assert!(CardRepository::new(db).find_by_id(card.id).await?.is_none());
    let user = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert_eq!(user.primary_payment_id, None);

    Ok(())
}

/// Tests reading another user's card.
///
/// Expected: Err(Forbidden), never the card itself
#[tokio::test]
async fn rejects_reading_foreign_card() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let address = factory::create_address(db, owner.id).await?;
    let card = factory::create_card(db, owner.id, address.id).await?;

    let result = PaymentService::new(db).get(intruder.id, card.id).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}
