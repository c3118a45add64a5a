// src/dtos/product.rs
use serde::Serialize;

use crate::models::product::Product;

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub icon: String,
    pub category: String,
}

/// The catalog payload. `offline` flags that the placeholder list was
/// served because the products table was unreachable.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub products: Vec<ProductResponse>,
    pub offline: bool,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            icon: product.icon,
            category: product.category,
        }
    }
}
