use super::*;

/// Tests loading cart lines with their products.
///
/// Expected: lines ordered by product id with product data attached
#[tokio::test]
async fn loads_lines_with_products() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cheap = factory::product::create_product_with_price(db, 250).await?;
    let dear = factory::product::create_product_with_price(db, 1_000).await?;
    let cart = factory::create_cart(db, None).await?;
    factory::create_cart_item(db, cart.id, dear.id, 1).await?;
    factory::create_cart_item(db, cart.id, cheap.id, 4).await?;

    let repo = CartRepository::new(db);
    let lines = repo.lines(cart.id).await?;

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].product.id, cheap.id);
    assert_eq!(lines[0].quantity, 4);
    assert_eq!(lines[1].product.price_cents, 1_000);

    Ok(())
}

/// Tests that other carts' lines are not included.
///
/// Expected: only the requested cart's lines
#[tokio::test]
async fn ignores_other_carts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    let mine = factory::create_cart(db, None).await?;
    let other = factory::create_cart(db, None).await?;
    factory::create_cart_item(db, other.id, product.id, 1).await?;

    let repo = CartRepository::new(db);

    assert!(repo.lines(mine.id).await?.is_empty());

    Ok(())
}
