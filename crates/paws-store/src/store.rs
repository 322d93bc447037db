//! # Store State
//!
//! The single mutual-exclusion boundary around the catalog and the ledger.
//!
//! ## Thread Safety
//! The original program was single-threaded by construction (one Swing event
//! thread dispatched every callback). This layer preserves that guarantee as
//! a design choice rather than an accident: the catalog and ledger live
//! together behind one `RwLock`, so a purchase's four-field update and a day
//! advance can never interleave, and no reader ever observes a transaction
//! halfway through.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     StoreState Operations                           │
//! │                                                                     │
//! │  Presentation Action        API Call              Lock              │
//! │  ───────────────────        ────────              ────              │
//! │                                                                     │
//! │  Click Purchase ──────────► purchase() ─────────► write             │
//! │                                                                     │
//! │  Click Next Day ──────────► advance_day() ──────► write             │
//! │                                                                     │
//! │  Redraw product table ────► catalog_snapshot() ─► read              │
//! │                                                                     │
//! │  Redraw refill table ─────► refill_list() ──────► read              │
//! │                                                                     │
//! │  Redraw money labels ─────► ledger_snapshot() ──► read              │
//! │                                                                     │
//! │  NOTE: Writers are serialized; readers may run concurrently with    │
//! │        each other but always see a consistent snapshot.             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, RwLock};

use tracing::{debug, info, warn};

use paws_core::{
    day, refill, register, snapshot, Catalog, Ledger, LedgerSnapshot, ProductSnapshot,
    PurchaseResult, Receipt, RefillEntry,
};

// =============================================================================
// Store
// =============================================================================

/// The catalog/ledger pair: one consistency unit.
///
/// The original reached shared static arrays through an inheritance chain
/// (`Register`/`SupplySummary extends ProdList`). Composition replaces that:
/// both the register and the day cycler operate on this one owned value.
#[derive(Debug, Clone)]
pub struct Store {
    catalog: Catalog,
    ledger: Ledger,
}

impl Store {
    /// Creates a store around a fixed catalog, opening the ledger at day 1.
    pub fn new(catalog: Catalog) -> Self {
        Store {
            catalog,
            ledger: Ledger::new(),
        }
    }

    /// Read view of the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read view of the ledger.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Applies a purchase against the catalog and ledger together.
    pub fn purchase(&mut self, name: &str, quantity: u32) -> PurchaseResult<Receipt> {
        register::purchase(&mut self.catalog, &mut self.ledger, name, quantity)
    }

    /// Advances to the next day, returning the new day number.
    pub fn advance_day(&mut self) -> u32 {
        day::advance(&mut self.catalog, &mut self.ledger)
    }
}

// =============================================================================
// Store State
// =============================================================================

/// Shared, lock-guarded store handle.
///
/// ## Thread Safety
/// Uses `Arc<RwLock<Store>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `RwLock`: Serializes `purchase`/`advance_day` while letting read-only
///   snapshot queries run concurrently with each other
///
/// ## Why Not Mutex?
/// The presentation layer redraws far more often than it mutates; snapshot
/// reads dominate, and the domain guarantees them a consistent view as long
/// as writers are exclusive.
#[derive(Debug, Clone)]
pub struct StoreState {
    inner: Arc<RwLock<Store>>,
}

impl StoreState {
    /// Creates a new store state around a fixed catalog.
    pub fn new(catalog: Catalog) -> Self {
        StoreState {
            inner: Arc::new(RwLock::new(Store::new(catalog))),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let day = state.with_store(|store| store.ledger().day());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        let store = self.inner.read().expect("store lock poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.inner.write().expect("store lock poisoned");
        f(&mut store)
    }

    /// Purchases `quantity` units of `name`.
    ///
    /// One write-lock acquisition covers the whole transaction, so the
    /// product counters and the daily money move as a unit.
    pub fn purchase(&self, name: &str, quantity: u32) -> PurchaseResult<Receipt> {
        let result = self.with_store_mut(|store| store.purchase(name, quantity));

        match &result {
            Ok(receipt) => info!(
                product = %receipt.name,
                quantity = receipt.quantity,
                line_total = receipt.line_total.cents(),
                remaining = receipt.remaining_stock,
                "purchase completed"
            ),
            Err(err) => warn!(product = name, quantity, error = %err, "purchase rejected"),
        }

        result
    }

    /// Advances to the next day and returns the new day number.
    pub fn advance_day(&self) -> u32 {
        let new_day = self.with_store_mut(Store::advance_day);
        info!(day = new_day, "advanced to next day");
        new_day
    }

    /// Full product table, frozen at the moment of the call.
    pub fn catalog_snapshot(&self) -> Vec<ProductSnapshot> {
        self.with_store(|store| snapshot::catalog_snapshot(store.catalog()))
    }

    /// Refill-priority rows: products with `on_shelf <= threshold`.
    pub fn refill_list(&self, threshold: i64) -> Vec<RefillEntry> {
        debug!(threshold, "refill query");
        self.with_store(|store| refill::below_threshold(store.catalog(), threshold))
    }

    /// Day and money figures, frozen at the moment of the call.
    pub fn ledger_snapshot(&self) -> LedgerSnapshot {
        self.with_store(|store| snapshot::ledger_snapshot(store.ledger()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use paws_core::{Money, Product, PurchaseError};

    fn widget_state() -> StoreState {
        let catalog = Catalog::new(vec![
            Product::new("Widget", Money::from_cents(1000), 5).unwrap(),
        ])
        .unwrap();
        StoreState::new(catalog)
    }

    /// The full shopkeeper scenario: purchase, rejection, day advance,
    /// refill query.
    #[test]
    fn test_end_to_end_widget_scenario() {
        let state = widget_state();

        // Day 1: sell 3 widgets at $10.00
        let receipt = state.purchase("Widget", 3).unwrap();
        assert_eq!(receipt.line_total.cents(), 3000);

        let rows = state.catalog_snapshot();
        assert_eq!(rows[0].on_shelf, 2);
        assert_eq!(rows[0].sold_today, 3);
        assert_eq!(rows[0].sold_total, 3);
        assert_eq!(state.ledger_snapshot().money_today.cents(), 3000);

        // Only 2 left: a 5-unit request bounces without mutation
        let err = state.purchase("Widget", 5).unwrap_err();
        assert!(matches!(
            err,
            PurchaseError::InsufficientStock {
                available: 2,
                requested: 5,
                ..
            }
        ));
        assert_eq!(state.catalog_snapshot()[0].on_shelf, 2);

        // Next day: money folds into the total, daily counters reset
        assert_eq!(state.advance_day(), 2);
        let ledger = state.ledger_snapshot();
        assert_eq!(ledger.day, 2);
        assert_eq!(ledger.money_total.cents(), 3000);
        assert_eq!(ledger.money_today.cents(), 0);

        let rows = state.catalog_snapshot();
        assert_eq!(rows[0].sold_today, 0);
        assert_eq!(rows[0].sold_total, 3);

        // Widget (2 on shelf) shows up at threshold 2
        let low = state.refill_list(2);
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].name, "Widget");
    }

    #[test]
    fn test_clones_share_the_same_store() {
        let state = widget_state();
        let other = state.clone();

        state.purchase("Widget", 1).unwrap();
        assert_eq!(other.catalog_snapshot()[0].on_shelf, 4);
    }

    #[test]
    fn test_concurrent_purchases_are_serialized() {
        use std::thread;

        let catalog = Catalog::new(vec![
            Product::new("Widget", Money::from_cents(1000), 100).unwrap(),
        ])
        .unwrap();
        let state = StoreState::new(catalog);

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let state = state.clone();
                thread::spawn(move || {
                    for _ in 0..10 {
                        state.purchase("Widget", 1).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        // Exactly 100 units sold, exactly $1000.00 earned: no update was lost
        // and no purchase was applied partially
        let rows = state.catalog_snapshot();
        assert_eq!(rows[0].on_shelf, 0);
        assert_eq!(rows[0].sold_total, 100);
        assert_eq!(state.ledger_snapshot().money_today.cents(), 100_000);
    }

    #[test]
    fn test_readers_never_see_a_torn_purchase() {
        use std::thread;

        let catalog = Catalog::new(vec![
            Product::new("Widget", Money::from_cents(1000), 1000).unwrap(),
        ])
        .unwrap();
        let state = StoreState::new(catalog);

        let writer = {
            let state = state.clone();
            thread::spawn(move || {
                for _ in 0..200 {
                    state.purchase("Widget", 1).unwrap();
                }
            })
        };

        let reader = {
            let state = state.clone();
            thread::spawn(move || {
                for _ in 0..200 {
                    // Both views come from one read-lock acquisition each;
                    // within a snapshot the counters must be consistent
                    let rows = state.catalog_snapshot();
                    let sold = rows[0].sold_total;
                    assert_eq!(rows[0].on_shelf, 1000 - sold);
                    assert_eq!(rows[0].earned_total.cents(), sold as i64 * 1000);
                }
            })
        };

        writer.join().unwrap();
        reader.join().unwrap();
    }

    #[test]
    fn test_advance_day_excludes_purchases() {
        let state = widget_state();
        state.purchase("Widget", 2).unwrap();

        state.advance_day();
        state.purchase("Widget", 1).unwrap();

        let ledger = state.ledger_snapshot();
        assert_eq!(ledger.money_today.cents(), 1000);
        assert_eq!(ledger.money_total.cents(), 2000);
    }
}
