use super::*;

/// Tests deleting the user's primary address.
///
/// Expected: address gone and the user's primary address cleared
#[tokio::test]
async fn clears_primary_reference() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let address = factory::create_address(db, user.id).await?;
    UserRepository::new(db)
        .set_primary_address(user.id, Some(address.id))
        .await?;

    AddressService::new(db).delete(user.id, address.id).await?;

    assert!(AddressRepository::new(db).find_by_id(address.id).await?.is_none());
    let user = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert_eq!(user.primary_address_id, None);

    Ok(())
}

/// Tests deleting an address that a saved card bills to.
///
/// Expected: Err(Conflict) and the address kept
#[tokio::test]
async fn rejects_billing_address_in_use() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let address = factory::create_address(db, user.id).await?;
    factory::create_card(db, user.id, address.id).await?;

    let result = AddressService::new(db).delete(user.id, address.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(AddressRepository::new(db).find_by_id(address.id).await?.is_some());

    Ok(())
}

/// Tests deleting another user's address.
///
/// Expected: Err(Forbidden) and the address kept
#[tokio::test]
async fn rejects_foreign_address() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let address = factory::create_address(db, owner.id).await?;

    let result = AddressService::new(db).delete(intruder.id, address.id).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert!(AddressRepository::new(db).find_by_id(address.id).await?.is_some());

    Ok(())
}
