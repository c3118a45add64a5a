use axum::{routing::get, Router};
use crate::handlers::transaction::{
    delete_transaction, get_stats, get_transaction, list_transactions,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions))
        .route("/transactions/stats", get(get_stats))
        .route("/transactions/{id}", get(get_transaction).delete(delete_transaction))
}
