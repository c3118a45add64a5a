// src/handlers/cart.rs
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use tracing::instrument;

use crate::cart::Cart;
use crate::dtos::cart::{AddItemRequest, CartLineResponse, CartResponse, SetQuantityRequest};
use crate::dtos::transaction::{CheckoutRequest, TransactionResponse};
use crate::error::AppError;
use crate::handlers::catalog::resolve_product;
use crate::models::transaction::TransactionRow;
use crate::state::AppState;

// The storefront quantity inputs cap at 99; anything a client sends beyond
// that range gets clamped before the cart sees it
const MAX_LINE_QUANTITY: i64 = 99;

fn cart_response(cart: &Cart) -> CartResponse {
    CartResponse {
        items: cart.lines().iter().map(CartLineResponse::from).collect(),
        summary: cart.summary(),
    }
}

// GET /cart - Current lines plus recomputed summary
#[instrument(skip(state))]
pub async fn get_cart(State(state): State<AppState>) -> Json<CartResponse> {
    let store = state.cart.lock().await;
    Json(cart_response(store.cart()))
}

// POST /cart/items - Add a product to the cart
#[instrument(skip(state, payload))]
pub async fn add_item(
    State(state): State<AppState>,
    Json(payload): Json<AddItemRequest>,
) -> Result<Json<CartResponse>, AppError> {
    // Invalid quantities are clamped here, not validated in the cart
    let quantity = payload.quantity.unwrap_or(1).clamp(1, MAX_LINE_QUANTITY);

    let product = resolve_product(&state.db_pool, payload.product_id)
        .await
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    let mut store = state.cart.lock().await;
    store.add_item(&product, quantity);
    Ok(Json(cart_response(store.cart())))
}

// PUT /cart/items/{id} - Overwrite a line's quantity (zero removes it)
#[instrument(skip(state, payload), fields(product_id))]
pub async fn set_quantity(
    Path(product_id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<SetQuantityRequest>,
) -> Json<CartResponse> {
    // Zero and below still mean removal; only the upper end is clamped
    let quantity = payload.quantity.min(MAX_LINE_QUANTITY);

    let mut store = state.cart.lock().await;
    store.set_quantity(product_id, quantity);
    Json(cart_response(store.cart()))
}

// DELETE /cart/items/{id} - Remove a line (no-op when absent)
#[instrument(skip(state), fields(product_id))]
pub async fn remove_item(
    Path(product_id): Path<i64>,
    State(state): State<AppState>,
) -> Json<CartResponse> {
    let mut store = state.cart.lock().await;
    store.remove_item(product_id);
    Json(cart_response(store.cart()))
}

// DELETE /cart - Empty the cart unconditionally
#[instrument(skip(state))]
pub async fn clear_cart(State(state): State<AppState>) -> Json<CartResponse> {
    let mut store = state.cart.lock().await;
    store.clear();
    Json(cart_response(store.cart()))
}

// POST /cart/checkout - Persist the cart as a transaction, then clear it.
// The cart lock is held across the insert, so a double-submitted checkout
// finds the cart already cleared and fails the empty-cart guard instead of
// inserting twice.
#[instrument(skip(state, payload))]
pub async fn checkout(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), AppError> {
    let mut store = state.cart.lock().await;

    if store.cart().is_empty() {
        return Err(AppError::validation("Cart is empty. Add some products first."));
    }

    let draft = store
        .cart()
        .draft_transaction(payload.customer_name, Utc::now());
    let items_json =
        serde_json::to_string(&draft.items).unwrap_or_else(|_| "[]".to_string());

    let row = sqlx::query_as::<_, TransactionRow>(
        "INSERT INTO transactions (transaction_date, subtotal, tax, total, items, customer_name)
         VALUES ($1, $2::FLOAT8, $3::FLOAT8, $4::FLOAT8, $5, $6)
         RETURNING id, transaction_date,
                   (subtotal)::FLOAT8 AS subtotal,
                   (tax)::FLOAT8      AS tax,
                   (total)::FLOAT8    AS total,
                   items, customer_name, created_at",
    )
    .bind(draft.transaction_date)
    .bind(draft.subtotal as f64)
    .bind(draft.tax)
    .bind(draft.total)
    .bind(&items_json)
    .bind(&draft.customer_name)
    .fetch_one(&state.db_pool)
    .await?;

    // Insert succeeded; only now does the cart (and its snapshot) empty
    store.clear();

    Ok((StatusCode::CREATED, Json(TransactionResponse::from(row))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use sqlx::postgres::PgPoolOptions;

    use crate::cart::CartStore;
    use crate::catalog::placeholder_products;

    // A pool that connects to nothing: lazy, so handlers that never issue a
    // query succeed, while any actual query fails fast.
    fn state(test_name: &str) -> AppState {
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_secs(2))
            .connect_lazy("postgres://127.0.0.1:1/bookstore")
            .expect("lazy pool");

        let mut path = std::env::temp_dir();
        path.push(format!("cart-handler-{}-{}.json", test_name, std::process::id()));
        let _ = std::fs::remove_file(&path);

        AppState::new(pool, CartStore::load(path))
    }

    #[tokio::test]
    async fn checkout_on_empty_cart_is_a_user_error_without_insert() {
        let state = state("empty-checkout");

        let result = checkout(
            State(state.clone()),
            Json(CheckoutRequest {
                customer_name: None,
            }),
        )
        .await;

        // ValidationError, not DatabaseError: the guard fired before any
        // query could hit the unreachable pool
        match result {
            Err(AppError::ValidationError(msg)) => assert!(msg.contains("Cart is empty")),
            _ => panic!("expected a validation error"),
        }
        assert!(state.cart.lock().await.cart().is_empty());
    }

    #[tokio::test]
    async fn failed_checkout_insert_leaves_cart_untouched() {
        let state = state("failed-checkout");
        {
            let mut store = state.cart.lock().await;
            store.add_item(&placeholder_products()[0], 2);
        }

        let result = checkout(
            State(state.clone()),
            Json(CheckoutRequest {
                customer_name: Some("James".to_string()),
            }),
        )
        .await;
        assert!(result.is_err());

        let store = state.cart.lock().await;
        assert_eq!(store.cart().lines().len(), 1);
        assert_eq!(store.cart().lines()[0].quantity, 2);
    }

    #[tokio::test]
    async fn add_item_clamps_quantity_into_range() {
        let state = state("add-clamp");

        // Product lookup falls back to the placeholder catalog when the
        // database is unreachable
        let Json(cart) = add_item(
            State(state.clone()),
            Json(AddItemRequest {
                product_id: 1,
                quantity: Some(5000),
            }),
        )
        .await
        .expect("add should fall back to the placeholder catalog");
        assert_eq!(cart.items[0].quantity, MAX_LINE_QUANTITY);

        let Json(cart) = add_item(
            State(state),
            Json(AddItemRequest {
                product_id: 1,
                quantity: Some(-4),
            }),
        )
        .await
        .expect("add should fall back to the placeholder catalog");
        assert_eq!(cart.items[0].quantity, MAX_LINE_QUANTITY + 1);
    }

    #[tokio::test]
    async fn add_item_rejects_unknown_product() {
        let state = state("add-unknown");

        let result = add_item(
            State(state),
            Json(AddItemRequest {
                product_id: 999,
                quantity: None,
            }),
        )
        .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn set_quantity_caps_high_values_and_removes_on_zero() {
        let state = state("set-clamp");
        {
            let mut store = state.cart.lock().await;
            store.add_item(&placeholder_products()[0], 1);
        }

        let Json(cart) = set_quantity(
            Path(1),
            State(state.clone()),
            Json(SetQuantityRequest { quantity: 500 }),
        )
        .await;
        assert_eq!(cart.items[0].quantity, MAX_LINE_QUANTITY);

        let Json(cart) = set_quantity(
            Path(1),
            State(state),
            Json(SetQuantityRequest { quantity: 0 }),
        )
        .await;
        assert!(cart.items.is_empty());
    }
}
