pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_product_table;
mod m20260105_000003_create_address_table;
mod m20260105_000004_create_card_table;
mod m20260105_000005_create_cart_table;
mod m20260105_000006_create_cart_item_table;
mod m20260112_000007_create_order_table;
mod m20260112_000008_create_order_item_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_product_table::Migration),
            Box::new(m20260105_000003_create_address_table::Migration),
            Box::new(m20260105_000004_create_card_table::Migration),
            Box::new(m20260105_000005_create_cart_table::Migration),
            Box::new(m20260105_000006_create_cart_item_table::Migration),
            Box::new(m20260112_000007_create_order_table::Migration),
            Box::new(m20260112_000008_create_order_item_table::Migration),
        ]
    }
}
