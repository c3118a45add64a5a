// src/handlers/transaction.rs
use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use tracing::{error, instrument};

use crate::dtos::transaction::{TransactionListItem, TransactionResponse, TransactionStats};
use crate::error::AppError;
use crate::models::transaction::TransactionRow;
use crate::state::AppState;

const SELECT_COLUMNS: &str = "id, transaction_date,
       (subtotal)::FLOAT8 AS subtotal,
       (tax)::FLOAT8      AS tax,
       (total)::FLOAT8    AS total,
       items, customer_name, created_at";

/// Case-insensitive substring match against the id and the customer label,
/// the same filter the admin search box applies per keystroke.
fn matches_search(row: &TransactionRow, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    row.id.to_string().contains(&q) || row.customer_label().to_lowercase().contains(&q)
}

// GET /transactions?search= - All transactions, newest first, optionally
// filtered over the loaded list
#[instrument(skip(state))]
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<TransactionListItem>>, AppError> {
    let rows = sqlx::query_as::<_, TransactionRow>(&format!(
        "SELECT {SELECT_COLUMNS} FROM transactions ORDER BY id DESC"
    ))
    .fetch_all(&state.db_pool)
    .await
    .map_err(|e| {
        error!(?e, "Failed to fetch transactions");
        AppError::from(e)
    })?;

    let search = params.get("search").map(String::as_str).unwrap_or("");
    let list = rows
        .iter()
        .filter(|row| matches_search(row, search))
        .map(TransactionListItem::from)
        .collect();

    Ok(Json(list))
}

// GET /transactions/{id} - Full record with line items
#[instrument(skip(state), fields(id))]
pub async fn get_transaction(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<TransactionResponse>, AppError> {
    let row = sqlx::query_as::<_, TransactionRow>(&format!(
        "SELECT {SELECT_COLUMNS} FROM transactions WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Transaction not found"))?;

    Ok(Json(TransactionResponse::from(row)))
}

// DELETE /transactions/{id} - Administrative delete; the client re-lists
#[instrument(skip(state), fields(id))]
pub async fn delete_transaction(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<()>, AppError> {
    let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
        .bind(id)
        .execute(&state.db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Transaction not found"));
    }

    Ok(Json(()))
}

// GET /transactions/stats - Totals for the admin stats strip
#[instrument(skip(state))]
pub async fn get_stats(
    State(state): State<AppState>,
) -> Result<Json<TransactionStats>, AppError> {
    let (total_sales, total_transactions) = sqlx::query_as::<_, (Option<f64>, i64)>(
        "SELECT SUM(total)::FLOAT8, COUNT(*) FROM transactions",
    )
    .fetch_one(&state.db_pool)
    .await?;

    Ok(Json(TransactionStats {
        total_sales: total_sales.unwrap_or(0.0),
        total_transactions,
    }))
}
