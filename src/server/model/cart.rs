//! Cart domain models.

use crate::{
    model::cart::{CartDto, CartLineDto},
    server::{
        error::AppError,
        model::product::Product,
        util::money::{cents_to_decimal, line_total_cents, sum_cents},
    },
};

/// Cart with its lines and their products.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: i32,
    pub user_id: Option<i32>,
    pub lines: Vec<CartLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: i32,
}

impl CartLine {
    pub fn line_total_cents(&self) -> Result<i64, AppError> {
        line_total_cents(self.product.price_cents, self.quantity)
    }
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines.
    pub fn num_items(&self) -> i64 {
        self.lines.iter().map(|line| i64::from(line.quantity)).sum()
    }

    /// Sum of price × quantity across all lines.
    pub fn total_cents(&self) -> Result<i64, AppError> {
        let lines = self
            .lines
            .iter()
            .map(CartLine::line_total_cents)
            .collect::<Result<Vec<_>, _>>()?;
        sum_cents(lines)
    }

    pub fn into_dto(self) -> Result<CartDto, AppError> {
        let num_items = self.num_items();
        let total = cents_to_decimal(self.total_cents()?);

        let items = self
            .lines
            .into_iter()
            .map(|line| {
                let line_total = cents_to_decimal(line.line_total_cents()?);
                Ok(CartLineDto {
                    quantity: line.quantity,
                    line_total,
                    product: line.product.into_dto(),
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(CartDto {
            id: Some(self.id),
            items,
            num_items,
            total,
        })
    }

    /// Body returned when the caller has no cart.
    pub fn empty_dto() -> CartDto {
        CartDto {
            id: None,
            items: Vec::new(),
            num_items: 0,
            total: cents_to_decimal(0),
        }
    }
}

/// Cart row without its lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartRecord {
    pub id: i32,
    pub user_id: Option<i32>,
}

impl CartRecord {
    pub fn from_entity(entity: entity::cart::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
        }
    }
}

/// Single cart line as stored, without the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItemRecord {
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

impl CartItemRecord {
    pub fn from_entity(entity: entity::cart_item::Model) -> Self {
        Self {
            cart_id: entity.cart_id,
            product_id: entity.product_id,
            quantity: entity.quantity,
        }
    }
}

/// Who is asking for a cart: the authenticated user, if any, and the cart id remembered by
/// their session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartCaller {
    pub user_id: Option<i32>,
    pub session_cart_id: Option<i32>,
}
