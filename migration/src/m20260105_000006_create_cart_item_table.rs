use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_product_table::Product, m20260105_000005_create_cart_table::Cart,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CartItem::Table)
                    .if_not_exists()
                    .col(integer(CartItem::CartId))
                    .col(integer(CartItem::ProductId))
                    .col(integer(CartItem::Quantity))
                    .primary_key(
                        Index::create()
                            .name("pk_cart_items")
                            .col(CartItem::CartId)
                            .col(CartItem::ProductId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_item_cart_id")
                            .from(CartItem::Table, CartItem::CartId)
                            .to(Cart::Table, Cart::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_item_product_id")
                            .from(CartItem::Table, CartItem::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CartItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CartItem {
    #[sea_orm(iden = "cart_items")]
    Table,
    CartId,
    ProductId,
    Quantity,
}
