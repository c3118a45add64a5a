// src/models/product.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog product. Immutable once loaded; rows come from the `products`
/// table or, when that is unreachable, from the placeholder list.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Minor currency units (never negative).
    pub price: i64,
    pub icon: String,
    pub category: String,
}
