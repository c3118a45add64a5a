pub mod cart;
pub mod products;
pub mod transactions;

use axum::Router;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(products::routes())
        .merge(cart::routes())
        .merge(transactions::routes())
}
