// src/models/transaction.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A `transactions` row as stored. `items` is kept JSON-encoded and parsed
/// on the way out so a malformed value degrades to an empty list instead of
/// failing the whole read.
#[derive(Debug, Clone, FromRow)]
pub struct TransactionRow {
    pub id: i64,
    pub transaction_date: DateTime<Utc>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub items: String,
    pub customer_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// One line item inside a transaction's `items` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionItem {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub price: i64,
    pub subtotal: i64,
}

impl TransactionRow {
    /// Decode the stored line items, tolerating malformed payloads.
    pub fn parse_items(&self) -> Vec<TransactionItem> {
        serde_json::from_str(&self.items).unwrap_or_default()
    }

    /// Customer label shown in the admin views.
    pub fn customer_label(&self) -> &str {
        self.customer_name.as_deref().unwrap_or("Anonymous")
    }
}
