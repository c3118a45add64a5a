// src/dtos/transaction.rs
use serde::{Deserialize, Serialize};

use crate::models::transaction::{TransactionItem, TransactionRow};

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub customer_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub id: i64,
    pub transaction_date: String,
    pub customer_name: String,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub item_count: i64,
    pub items: Vec<TransactionItem>,
    pub created_at: Option<String>,
}

/// Compact row for the admin list/grid.
#[derive(Debug, Serialize)]
pub struct TransactionListItem {
    pub id: i64,
    pub customer_name: String,
    pub item_count: i64,
    pub total: f64,
    pub transaction_date: String,
}

/// The admin panel's stats strip.
#[derive(Debug, Serialize)]
pub struct TransactionStats {
    pub total_sales: f64,
    pub total_transactions: i64,
}

impl From<TransactionRow> for TransactionResponse {
    fn from(row: TransactionRow) -> Self {
        let items = row.parse_items();
        let item_count = items.iter().map(|i| i.quantity).sum();
        Self {
            id: row.id,
            transaction_date: row.transaction_date.to_rfc3339(),
            customer_name: row.customer_label().to_string(),
            subtotal: row.subtotal,
            tax: row.tax,
            total: row.total,
            item_count,
            items,
            created_at: row.created_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

impl From<&TransactionRow> for TransactionListItem {
    fn from(row: &TransactionRow) -> Self {
        let item_count = row.parse_items().iter().map(|i| i.quantity).sum();
        Self {
            id: row.id,
            customer_name: row.customer_label().to_string(),
            item_count,
            total: row.total,
            transaction_date: row.transaction_date.to_rfc3339(),
        }
    }
}
