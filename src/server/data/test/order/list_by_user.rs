use super::*;

/// Tests listing a user's orders newest first.
///
/// Expected: the later order is returned first and other users' orders are excluded
#[tokio::test]
async fn lists_orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_checkout_fixture(db, 1).await?;
    let line = [(fixture.product.id, 1, 1_000)];
    let older =
        factory::create_order(db, fixture.user.id, fixture.address.id, fixture.card.id, &line)
            .await?;
    let newer =
        factory::create_order(db, fixture.user.id, fixture.address.id, fixture.card.id, &line)
            .await?;

    let stranger = factory::create_user(db).await?;
    let address = factory::create_address(db, stranger.id).await?;
    let card = factory::create_card(db, stranger.id, address.id).await?;
    factory::create_order(db, stranger.id, address.id, card.id, &line).await?;

    let repo = OrderRepository::new(db);
    let orders = repo.list_by_user(fixture.user.id).await?;

    let ids: Vec<_> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, [newer.id, older.id]);

    Ok(())
}
