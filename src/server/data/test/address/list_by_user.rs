use super::*;

/// Tests listing only the caller's addresses.
///
/// Expected: the user's addresses in creation order, none belonging to other users
#[tokio::test]
async fn lists_only_owned_addresses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let first = factory::create_address(db, user.id).await?;
    let second = factory::create_address(db, user.id).await?;
    factory::create_address(db, other.id).await?;

    let repo = AddressRepository::new(db);
    let addresses = repo.list_by_user(user.id).await?;

    let ids: Vec<_> = addresses.iter().map(|a| a.id).collect();
    assert_eq!(ids, [first.id, second.id]);

    Ok(())
}
