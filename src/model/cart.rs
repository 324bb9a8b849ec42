use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::product::ProductDto;

/// Cart contents. `id` is `None` when the caller has no cart yet.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CartDto {
    pub id: Option<i32>,
    pub items: Vec<CartLineDto>,
    pub num_items: i64,
    pub total: Decimal,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CartLineDto {
    pub product: ProductDto,
    pub quantity: i32,
    pub line_total: Decimal,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AddCartItemDto {
    pub product_id: i32,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UpdateCartItemDto {
    pub quantity: i32,
}
