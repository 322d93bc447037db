//! # Refill Query
//!
//! Derives, on demand, the products at or below a low-stock threshold.
//!
//! The original recomputed its refill-priority table only when the "Update"
//! button fired, so the table could lag behind the shelves. The core has no
//! such cache: every call walks the live catalog and returns a frozen
//! snapshot. Staleness, if the presentation layer wants it, is its own
//! business.

use crate::catalog::Catalog;
use crate::snapshot::RefillEntry;

/// Returns every product with `on_shelf <= threshold`, in catalog order.
///
/// The threshold is a plain `i64` so callers can pass anything:
/// - negative → empty (no unsigned stock can be ≤ a negative number)
/// - larger than any stock → the full catalog
///
/// ## Example
/// ```rust
/// use paws_core::{refill, Catalog, Money, Product};
///
/// let catalog = Catalog::new(vec![
///     Product::new("Widget", Money::from_cents(1000), 2).unwrap(),
///     Product::new("Gadget", Money::from_cents(2550), 8).unwrap(),
/// ])
/// .unwrap();
///
/// let low = refill::below_threshold(&catalog, 5);
/// assert_eq!(low.len(), 1);
/// assert_eq!(low[0].name, "Widget");
///
/// assert!(refill::below_threshold(&catalog, -1).is_empty());
/// ```
pub fn below_threshold(catalog: &Catalog, threshold: i64) -> Vec<RefillEntry> {
    catalog
        .iter()
        .filter(|p| (p.on_shelf() as i64) <= threshold)
        .map(RefillEntry::from)
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
