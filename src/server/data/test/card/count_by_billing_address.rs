use super::*;

/// Tests counting cards billed to an address.
///
/// Expected: the count drops to zero after the card is re-billed
#[tokio::test]
async fn counts_cards_billed_to_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let home = factory::create_address(db, user.id).await?;
    let office = factory::create_address(db, user.id).await?;
    let card = factory::create_card(db, user.id, home.id).await?;

    let repo = CardRepository::new(db);
    assert_eq!(repo.count_by_billing_address(home.id).await?, 1);

    repo.set_billing_address(card.id, office.id).await?;

    assert_eq!(repo.count_by_billing_address(home.id).await?, 0);
    assert_eq!(repo.count_by_billing_address(office.id).await?, 1);

    Ok(())
}
