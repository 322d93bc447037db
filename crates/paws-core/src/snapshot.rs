//! # Snapshot DTOs
//!
//! Read-only views handed to the presentation layer.
//!
//! ## Why DTOs?
//! - Decouples the internal domain model from the API contract
//! - Owned values: a snapshot is frozen at the moment of the call, never a
//!   live view into the catalog (the original's stale-table problem becomes
//!   impossible to have in the core)
//! - Handles serde rename to camelCase for JS consumption, with ts-rs
//!   bindings so the presentation layer's types never drift
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  Catalog/Ledger (live)          Presentation layer               │
//! │        │                                                         │
//! │        ├── catalog_snapshot() ──► full product table             │
//! │        ├── refill entries     ──► refill-priority table          │
//! │        └── ledger_snapshot()  ──► day / money labels             │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::ledger::Ledger;
use crate::money::Money;
use crate::product::Product;

// =============================================================================
// Product Snapshot
// =============================================================================

/// One row of the full product table: everything the original summary window
/// displayed per product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductSnapshot {
    pub name: String,
    pub price: Money,
    pub on_shelf: u32,
    pub sold_today: u32,
    pub sold_total: u32,
    /// `price × sold_total`, precomputed so the table never does money math.
    pub earned_total: Money,
}

impl From<&Product> for ProductSnapshot {
    fn from(p: &Product) -> Self {
        ProductSnapshot {
            name: p.name().to_string(),
            price: p.price(),
            on_shelf: p.on_shelf(),
            sold_today: p.sold_today(),
            sold_total: p.sold_total(),
            earned_total: p.earned_total(),
        }
    }
}

// =============================================================================
// Refill Entry
// =============================================================================

/// One row of the refill-priority table: the shorter per-product view used
/// when deciding what to restock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RefillEntry {
    pub name: String,
    pub on_shelf: u32,
    pub earned_total: Money,
}

impl From<&Product> for RefillEntry {
    fn from(p: &Product) -> Self {
        RefillEntry {
            name: p.name().to_string(),
            on_shelf: p.on_shelf(),
            earned_total: p.earned_total(),
        }
    }
}

// =============================================================================
// Ledger Snapshot
// =============================================================================

/// The day/money labels: current day, earnings today, cumulative earnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LedgerSnapshot {
    pub day: u32,
    pub money_today: Money,
    pub money_total: Money,
}

impl From<&Ledger> for LedgerSnapshot {
    fn from(l: &Ledger) -> Self {
        LedgerSnapshot {
            day: l.day(),
            money_today: l.money_today(),
            money_total: l.money_total(),
        }
    }
}

// =============================================================================
// Assembly
// =============================================================================

/// Snapshots every product in catalog order.
pub fn catalog_snapshot(catalog: &Catalog) -> Vec<ProductSnapshot> {
    catalog.iter().map(ProductSnapshot::from).collect()
}

/// Snapshots the ledger.
pub fn ledger_snapshot(ledger: &Ledger) -> LedgerSnapshot {
    LedgerSnapshot::from(ledger)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register;

    fn fixture() -> (Catalog, Ledger) {
        let catalog = Catalog::new(vec![
            Product::new("Widget", Money::from_cents(1000), 5).unwrap(),
            Product::new("Gadget", Money::from_cents(2550), 8).unwrap(),
        ])
        .unwrap();
        (catalog, Ledger::new())
    }

    #[test]
    fn test_catalog_snapshot_preserves_order_and_derives_earnings() {
        let (mut catalog, mut ledger) = fixture();
        register::purchase(&mut catalog, &mut ledger, "Gadget", 2).unwrap();

        let rows = catalog_snapshot(&catalog);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Widget");
        assert_eq!(rows[0].earned_total, Money::zero());
        assert_eq!(rows[1].name, "Gadget");
        assert_eq!(rows[1].sold_total, 2);
        assert_eq!(rows[1].earned_total.cents(), 5100);
    }

    #[test]
    fn test_snapshot_is_frozen_not_live() {
        let (mut catalog, mut ledger) = fixture();
        let before = catalog_snapshot(&catalog);

        register::purchase(&mut catalog, &mut ledger, "Widget", 3).unwrap();

        // The earlier snapshot still shows the pre-purchase state
        assert_eq!(before[0].on_shelf, 5);
        assert_eq!(catalog_snapshot(&catalog)[0].on_shelf, 2);
    }

    #[test]
    fn test_ledger_snapshot() {
        let (mut catalog, mut ledger) = fixture();
        register::purchase(&mut catalog, &mut ledger, "Widget", 3).unwrap();

        let snap = ledger_snapshot(&ledger);
        assert_eq!(snap.day, 1);
        assert_eq!(snap.money_today.cents(), 3000);
        assert_eq!(snap.money_total, Money::zero());
    }

    #[test]
    fn test_snapshot_json_shape() {
        // The presentation layer depends on these exact camelCase keys
        let (catalog, _) = fixture();
        let json = serde_json::to_value(&catalog_snapshot(&catalog)[0]).unwrap();

        assert_eq!(json["name"], "Widget");
        assert_eq!(json["onShelf"], 5);
        assert_eq!(json["soldToday"], 0);
        assert_eq!(json["soldTotal"], 0);
        assert!(json.get("earnedTotal").is_some());
    }
}
