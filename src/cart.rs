// src/cart.rs
//
// The cart aggregator: an in-memory list of product/quantity lines keyed by
// product id, with totals recomputed on every read and the whole list
// mirrored to a JSON snapshot file after every mutation. The snapshot is a
// plain copy of the cart, not a queue; losing it only loses the session.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::product::Product;
use crate::models::transaction::TransactionItem;

/// Fixed 10% tax applied to the cart subtotal.
pub const TAX_RATE: f64 = 0.10;

/// One product/quantity pairing in the cart. Fields default individually so
/// an old or hand-edited snapshot still loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub quantity: i64,
}

/// Totals derived from the cart lines. Subtotal stays exact in minor units;
/// tax and total are plain float arithmetic off it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CartTotals {
    pub subtotal: i64,
    pub tax: f64,
    pub total: f64,
}

/// A checkout draft: everything the `transactions` insert needs except the
/// server-assigned id.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub transaction_date: DateTime<Utc>,
    pub subtotal: i64,
    pub tax: f64,
    pub total: f64,
    pub items: Vec<TransactionItem>,
    pub customer_name: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` of `product`. A line already holding the product id is
    /// incremented; otherwise a new line is appended. Quantity is clamped to
    /// at least 1 by the caller, not here.
    pub fn add_item(&mut self, product: &Product, quantity: i64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine {
                id: product.id,
                name: product.name.clone(),
                description: product.description.clone(),
                price: product.price,
                icon: product.icon.clone(),
                category: product.category.clone(),
                quantity,
            });
        }
    }

    /// Overwrite a line's quantity; zero or below removes the line.
    pub fn set_quantity(&mut self, product_id: i64, quantity: i64) {
        if quantity <= 0 {
            self.lines.retain(|l| l.id != product_id);
        } else if let Some(line) = self.lines.iter_mut().find(|l| l.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Drop the matching line; no-op when absent.
    pub fn remove_item(&mut self, product_id: i64) {
        self.lines.retain(|l| l.id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Recompute subtotal/tax/total from the lines. Pure. Saturating so a
    /// snapshot with absurd quantities cannot panic the arithmetic.
    pub fn summary(&self) -> CartTotals {
        let subtotal: i64 = self
            .lines
            .iter()
            .fold(0i64, |acc, l| acc.saturating_add(l.price.saturating_mul(l.quantity)));
        let tax = subtotal as f64 * TAX_RATE;
        let total = subtotal as f64 + tax;
        CartTotals {
            subtotal,
            tax,
            total,
        }
    }

    /// Build the transaction record for the current cart contents. The
    /// caller guards against an empty cart first.
    pub fn draft_transaction(
        &self,
        customer_name: Option<String>,
        now: DateTime<Utc>,
    ) -> NewTransaction {
        let totals = self.summary();
        let items = self
            .lines
            .iter()
            .map(|l| TransactionItem {
                product_id: l.id,
                product_name: l.name.clone(),
                quantity: l.quantity,
                price: l.price,
                subtotal: l.price.saturating_mul(l.quantity),
            })
            .collect();

        NewTransaction {
            transaction_date: now,
            subtotal: totals.subtotal,
            tax: totals.tax,
            total: totals.total,
            items,
            customer_name,
        }
    }
}

/// The cart plus its snapshot file. Every mutating call rewrites the full
/// JSON array; a failed write is logged and otherwise ignored.
pub struct CartStore {
    path: PathBuf,
    cart: Cart,
}

impl CartStore {
    /// Load the snapshot at `path`, treating a missing or malformed file as
    /// an empty cart.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cart = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Vec<CartLine>>(&raw) {
                Ok(lines) => Cart { lines },
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Malformed cart snapshot, starting empty");
                    Cart::default()
                }
            },
            Err(_) => Cart::default(),
        };
        Self { path, cart }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add_item(&mut self, product: &Product, quantity: i64) {
        self.cart.add_item(product, quantity);
        self.persist();
    }

    pub fn set_quantity(&mut self, product_id: i64, quantity: i64) {
        self.cart.set_quantity(product_id, quantity);
        self.persist();
    }

    pub fn remove_item(&mut self, product_id: i64) {
        self.cart.remove_item(product_id);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    fn persist(&self) {
        match serde_json::to_string(&self.cart.lines) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    warn!(path = %self.path.display(), error = %e, "Failed to write cart snapshot");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize cart snapshot"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::placeholder_products;

    fn product(id: i64, price: i64) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            description: String::new(),
            price,
            icon: String::new(),
            category: String::new(),
        }
    }

    #[test]
    fn repeated_adds_accumulate_quantity() {
        let mut cart = Cart::default();
        let p = product(1, 25000);
        cart.add_item(&p, 2);
        cart.add_item(&p, 3);
        cart.add_item(&p, 1);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 6);
    }

    #[test]
    fn set_quantity_zero_removes_line() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, 25000), 2);
        cart.add_item(&product(2, 45000), 1);

        cart.set_quantity(1, 0);

        assert!(cart.lines().iter().all(|l| l.id != 1));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn set_quantity_overwrites_rather_than_increments() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, 25000), 5);
        cart.set_quantity(1, 2);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn remove_item_is_noop_when_absent() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, 25000), 1);
        cart.remove_item(99);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn clear_empties_unconditionally() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, 25000), 2);
        cart.clear();
        assert!(cart.is_empty());
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn summary_matches_reference_scenario() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, 25000), 2);
        cart.add_item(&product(2, 45000), 1);

        let totals = cart.summary();
        assert_eq!(totals.subtotal, 95000);
        assert_eq!(totals.tax, 9500.0);
        assert_eq!(totals.total, 104500.0);
    }

    #[test]
    fn total_is_subtotal_times_one_point_one_after_every_mutation() {
        let mut cart = Cart::default();
        let check = |cart: &Cart| {
            let t = cart.summary();
            assert!((t.total - t.subtotal as f64 * 1.1).abs() < 1e-6);
        };

        check(&cart);
        cart.add_item(&product(1, 19999), 3);
        check(&cart);
        cart.add_item(&product(2, 7), 11);
        check(&cart);
        cart.set_quantity(1, 1);
        check(&cart);
        cart.remove_item(2);
        check(&cart);
        cart.clear();
        check(&cart);
    }

    #[test]
    fn summary_saturates_on_absurd_quantities() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, i64::MAX / 2), 3);
        cart.add_item(&product(2, 25000), i64::MAX);

        let totals = cart.summary();
        assert_eq!(totals.subtotal, i64::MAX);

        let draft = cart.draft_transaction(None, Utc::now());
        assert_eq!(draft.items[0].subtotal, i64::MAX);
    }

    #[test]
    fn draft_transaction_carries_totals_and_ordered_items() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, 25000), 2);
        cart.add_item(&product(2, 45000), 1);

        let now = Utc::now();
        let draft = cart.draft_transaction(Some("James".to_string()), now);

        assert_eq!(draft.transaction_date, now);
        assert_eq!(draft.subtotal, 95000);
        assert_eq!(draft.tax, 9500.0);
        assert_eq!(draft.total, 104500.0);
        assert_eq!(draft.customer_name.as_deref(), Some("James"));
        assert_eq!(draft.items.len(), 2);
        assert_eq!(draft.items[0].product_id, 1);
        assert_eq!(draft.items[0].subtotal, 50000);
        assert_eq!(draft.items[1].product_id, 2);
        assert_eq!(draft.items[1].subtotal, 45000);
    }

    fn temp_snapshot(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("cart-{}-{}.json", name, std::process::id()));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn snapshot_round_trips_id_quantity_pairs() {
        let path = temp_snapshot("roundtrip");

        let mut store = CartStore::load(&path);
        for p in placeholder_products().iter().take(3) {
            store.add_item(p, p.id + 1);
        }
        store.set_quantity(2, 7);

        let expected: Vec<(i64, i64)> = store
            .cart()
            .lines()
            .iter()
            .map(|l| (l.id, l.quantity))
            .collect();

        let reloaded = CartStore::load(&path);
        let actual: Vec<(i64, i64)> = reloaded
            .cart()
            .lines()
            .iter()
            .map(|l| (l.id, l.quantity))
            .collect();

        assert_eq!(expected, actual);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn malformed_snapshot_loads_as_empty_cart() {
        let path = temp_snapshot("malformed");
        fs::write(&path, "not json at all").unwrap();

        let store = CartStore::load(&path);
        assert!(store.cart().is_empty());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn snapshot_with_missing_fields_defaults_them() {
        let path = temp_snapshot("partial");
        fs::write(&path, r#"[{"id": 3, "quantity": 2}]"#).unwrap();

        let store = CartStore::load(&path);
        assert_eq!(store.cart().lines().len(), 1);
        assert_eq!(store.cart().lines()[0].id, 3);
        assert_eq!(store.cart().lines()[0].quantity, 2);
        assert_eq!(store.cart().lines()[0].price, 0);
        assert!(store.cart().lines()[0].name.is_empty());
        let _ = fs::remove_file(&path);
    }
}
