use super::*;

/// Tests adding a product that is not yet in the cart.
///
/// Expected: a new line with the given quantity
#[tokio::test]
async fn inserts_new_line() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    let cart = factory::create_cart(db, None).await?;

    let repo = CartRepository::new(db);
    repo.add_quantity(cart.id, product.id, 2).await?;

    let item = repo.find_item(cart.id, product.id).await?.unwrap();
    assert_eq!(item.quantity, 2);

    Ok(())
}

/// Tests that repeated adds accumulate on the existing line.
///
/// Expected: a single line whose quantity is the sum of both adds
#[tokio::test]
async fn accumulates_quantity_on_existing_line() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    let cart = factory::create_cart(db, None).await?;

    let repo = CartRepository::new(db);
    repo.add_quantity(cart.id, product.id, 2).await?;
    repo.add_quantity(cart.id, product.id, 3).await?;

    let items = repo.items(cart.id).await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 5);

    Ok(())
}
