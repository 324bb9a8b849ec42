use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with a chosen set of tables.
///
/// Tables are created in the order they are added, so entities holding foreign keys should be
/// added after the entities they reference.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Address)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to generate the CREATE TABLE statement from
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed for catalog and cart operations.
    ///
    /// Adds `User`, `Product`, `Cart` and `CartItem` in dependency order.
    pub fn with_cart_tables(self) -> Self {
        self.with_table(User)
            .with_table(Product)
            .with_table(Cart)
            .with_table(CartItem)
    }

    /// Adds the tables needed for account management.
    ///
    /// Adds `User`, `Address` and `Card` in dependency order.
    pub fn with_account_tables(self) -> Self {
        self.with_table(User).with_table(Address).with_table(Card)
    }

    /// Adds every storefront table.
    ///
    /// Use this for checkout and order tests, which touch carts, account data and orders in
    /// the same flow.
    pub fn with_shop_tables(self) -> Self {
        self.with_table(User)
            .with_table(Product)
            .with_table(Address)
            .with_table(Card)
            .with_table(Cart)
            .with_table(CartItem)
            .with_table(Order)
            .with_table(OrderItem)
    }

    /// Creates the in-memory database and runs every CREATE TABLE statement.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the configured tables ready
    /// - `Err(TestError::Database)` - Failed to connect or to create a table
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
