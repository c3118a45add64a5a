// src/handlers/catalog.rs
use axum::{extract::State, Json};
use sqlx::PgPool;
use tracing::{instrument, warn};

use crate::catalog::placeholder_products;
use crate::dtos::product::{CatalogResponse, ProductResponse};
use crate::models::product::Product;
use crate::state::AppState;

// GET /products - Load the catalog, seeding an empty table on first run.
// Never fails: any database problem degrades to the placeholder list with
// the offline flag raised.
#[instrument(skip(state))]
pub async fn get_products(State(state): State<AppState>) -> Json<CatalogResponse> {
    match load_products(&state.db_pool).await {
        Ok(products) => Json(CatalogResponse {
            products: products.into_iter().map(ProductResponse::from).collect(),
            offline: false,
        }),
        Err(e) => {
            if is_missing_schema(&e) {
                warn!("Products table not found, database is not configured; serving placeholder catalog");
            } else {
                warn!(error = %e, "Failed to load products, serving placeholder catalog");
            }
            Json(CatalogResponse {
                products: placeholder_products()
                    .into_iter()
                    .map(ProductResponse::from)
                    .collect(),
                offline: true,
            })
        }
    }
}

async fn load_products(db_pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
    let products = fetch_products(db_pool).await?;
    if products.is_empty() {
        seed_products(db_pool).await?;
        return fetch_products(db_pool).await;
    }
    Ok(products)
}

async fn fetch_products(db_pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, icon, category
         FROM products ORDER BY id",
    )
    .fetch_all(db_pool)
    .await
}

async fn seed_products(db_pool: &PgPool) -> Result<(), sqlx::Error> {
    for product in placeholder_products() {
        sqlx::query(
            "INSERT INTO products (id, name, description, price, icon, category)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.icon)
        .bind(&product.category)
        .execute(db_pool)
        .await?;
    }
    Ok(())
}

fn is_missing_schema(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("42P01"))
}

/// Product lookup for add-to-cart: the database row when reachable,
/// otherwise the placeholder list (mirroring whatever catalog the caller
/// was shown).
pub async fn resolve_product(db_pool: &PgPool, product_id: i64) -> Option<Product> {
    match sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, icon, category
         FROM products WHERE id = $1",
    )
    .bind(product_id)
    .fetch_optional(db_pool)
    .await
    {
        Ok(Some(product)) => Some(product),
        Ok(None) => placeholder_products().into_iter().find(|p| p.id == product_id),
        Err(e) => {
            warn!(error = %e, product_id, "Product lookup failed, checking placeholder catalog");
            placeholder_products().into_iter().find(|p| p.id == product_id)
        }
    }
}
