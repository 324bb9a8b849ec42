use super::*;

/// Tests loading order lines with product names.
///
/// Expected: one item per line with the snapshot price
#[tokio::test]
async fn loads_items_with_product_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_checkout_fixture(db, 1).await?;
    let order = factory::create_order(
        db,
        fixture.user.id,
        fixture.address.id,
        fixture.card.id,
        &[(fixture.product.id, 3, 700)],
    )
    .await?;

    let repo = OrderRepository::new(db);
    let items = repo.items(order.id).await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product_name, fixture.product.name);
    assert_eq!(items[0].quantity, 3);
    assert_eq!(items[0].unit_price_cents, 700);

    Ok(())
}
