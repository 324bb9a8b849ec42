use super::*;

/// Tests re-keying a line to another cart.
///
/// Expected: the line exists under the target cart with the same quantity and no longer
/// under the source cart
#[tokio::test]
async fn moves_line_between_carts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    let from = factory::create_cart(db, None).await?;
    let to = factory::create_cart(db, None).await?;
    factory::create_cart_item(db, from.id, product.id, 4).await?;

    let repo = CartRepository::new(db);
    repo.move_item(from.id, to.id, product.id).await?;

    assert!(repo.find_item(from.id, product.id).await?.is_none());
    let moved = repo.find_item(to.id, product.id).await?.unwrap();
    assert_eq!(moved.quantity, 4);

    Ok(())
}
