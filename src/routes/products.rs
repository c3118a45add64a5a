use axum::{routing::get, Router};
use crate::handlers::catalog::get_products;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/products", get(get_products))
}
