// src/dtos/cart.rs
use serde::{Deserialize, Serialize};

use crate::cart::{CartLine, CartTotals};

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub product_id: i64,
    /// Defaults to 1; anything below 1 is clamped up by the handler.
    pub quantity: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SetQuantityRequest {
    pub quantity: i64,
}

#[derive(Debug, Serialize)]
pub struct CartLineResponse {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub icon: String,
    pub quantity: i64,
    pub line_total: i64,
}

#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub items: Vec<CartLineResponse>,
    pub summary: CartTotals,
}

impl From<&CartLine> for CartLineResponse {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id,
            name: line.name.clone(),
            price: line.price,
            icon: line.icon.clone(),
            quantity: line.quantity,
            line_total: line.price.saturating_mul(line.quantity),
        }
    }
}
