// src/state.rs
use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::Mutex;

use crate::cart::CartStore;

/// Shared application state: the database pool plus the session cart.
///
/// The cart is process-wide state with page-session lifecycle: loaded from
/// its snapshot file at startup, mutated only through the handlers, and
/// serialized behind a single mutex so concurrent requests (including a
/// double-submitted checkout) observe each other's effects.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub cart: Arc<Mutex<CartStore>>,
}

impl AppState {
    pub fn new(db_pool: PgPool, cart: CartStore) -> Self {
        Self {
            db_pool,
            cart: Arc::new(Mutex::new(cart)),
        }
    }
}
