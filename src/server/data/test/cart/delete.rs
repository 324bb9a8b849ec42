use super::*;

/// Tests deleting a cart with lines.
///
/// Expected: Ok(true), the cart and all of its lines are gone
#[tokio::test]
async fn deletes_cart_and_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_product(db).await?;
    let second = factory::create_product(db).await?;
    let cart = factory::create_cart(db, None).await?;
    factory::create_cart_item(db, cart.id, first.id, 1).await?;
    factory::create_cart_item(db, cart.id, second.id, 2).await?;

    let repo = CartRepository::new(db);
    let deleted = repo.delete(cart.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(cart.id).await?.is_none());
    assert_eq!(repo.count_items(cart.id).await?, 0);

    Ok(())
}

/// Tests deleting a cart that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_cart() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CartRepository::new(db);
    let deleted = repo.delete(999).await?;

    assert!(!deleted);

    Ok(())
}
