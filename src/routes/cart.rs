use axum::{
    routing::{get, post, put},
    Router,
};
use crate::handlers::cart::{add_item, checkout, clear_cart, get_cart, remove_item, set_quantity};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cart", get(get_cart).delete(clear_cart))
        .route("/cart/items", post(add_item))
        .route("/cart/items/{id}", put(set_quantity).delete(remove_item))
        .route("/cart/checkout", post(checkout))
}
