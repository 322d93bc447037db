//! # Register
//!
//! The purchase transaction: the only operation that sells stock.
//!
//! ## Transaction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      purchase(name, qty)                            │
//! │                                                                     │
//! │  validate qty > 0 ──── fail ──► Validation          (no mutation)   │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  catalog.find(name) ── miss ──► UnknownProduct      (no mutation)   │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  qty <= on_shelf? ──── no ────► InsufficientStock   (no mutation)   │
//! │        │                                                            │
//! │        ▼ yes                                                        │
//! │  ┌───────────────────────────────────────────┐                      │
//! │  │  ONE ATOMIC UNIT                          │                      │
//! │  │  on_shelf    -= qty                       │                      │
//! │  │  sold_today  += qty                       │                      │
//! │  │  sold_total  += qty                       │                      │
//! │  │  money_today += qty × price               │                      │
//! │  └───────────────────────────────────────────┘                      │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  Receipt { name, qty, unit price, line total, remaining stock }     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All checks happen before the first field is written, so a rejected
//! purchase leaves every counter untouched. The caller holds `&mut` on both
//! the catalog and the ledger for the whole call, which is what makes the
//! four-field update indivisible.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::{PurchaseError, PurchaseResult};
use crate::ledger::Ledger;
use crate::money::Money;
use crate::validation::validate_quantity;

// =============================================================================
// Receipt
// =============================================================================

/// The outcome of a successful purchase.
///
/// Carries everything the presentation layer needs to render a status line
/// and refresh its money label, without the core dictating wording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Receipt {
    /// Name of the purchased product.
    pub name: String,

    /// Units purchased.
    pub quantity: u32,

    /// Unit price at time of purchase.
    pub unit_price: Money,

    /// `quantity × unit_price`, the amount accrued to today's earnings.
    pub line_total: Money,

    /// Shelf stock remaining after this purchase.
    pub remaining_stock: u32,
}

/// Render-ready summary, in the spirit of the original's status label.
impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "purchased {} x {} for {} ({} left on shelf)",
            self.quantity, self.name, self.line_total, self.remaining_stock
        )
    }
}

// =============================================================================
// Purchase
// =============================================================================

/// Attempts to purchase `quantity` units of the product named `name`.
///
/// On success the product's three counters and the ledger's daily earnings
/// move together; on any failure nothing changes and the error says why.
///
/// ## Example
/// ```rust
/// use paws_core::{register, Catalog, Ledger, Money, Product};
///
/// let mut catalog = Catalog::new(vec![
///     Product::new("Widget", Money::from_cents(1000), 5).unwrap(),
/// ])
/// .unwrap();
/// let mut ledger = Ledger::new();
///
/// let receipt = register::purchase(&mut catalog, &mut ledger, "Widget", 3).unwrap();
/// assert_eq!(receipt.line_total.cents(), 3000);
/// assert_eq!(ledger.money_today().cents(), 3000);
/// ```
pub fn purchase(
    catalog: &mut Catalog,
    ledger: &mut Ledger,
    name: &str,
    quantity: u32,
) -> PurchaseResult<Receipt> {
    // The UI slider bounds quantity, but the register re-validates: callers
    // are not guaranteed to be that slider.
    validate_quantity(quantity)?;

    let product = catalog
        .find(name)
        .and_then(|index| catalog.get_mut(index))
        .ok_or_else(|| PurchaseError::UnknownProduct {
            name: name.to_string(),
        })?;

    if !product.can_sell(quantity) {
        return Err(PurchaseError::InsufficientStock {
            name: product.name().to_string(),
            available: product.on_shelf(),
            requested: quantity,
        });
    }

    // Point of no return: all four fields move together.
    let line_total = product.price().multiply_quantity(quantity as i64);
    product.record_sale(quantity);
    let receipt = Receipt {
        name: product.name().to_string(),
        quantity,
        unit_price: product.price(),
        line_total,
        remaining_stock: product.on_shelf(),
    };
    ledger.record_sale(line_total);

    Ok(receipt)
}

// =============================================================================
// Unit Tests
// =============================================================================
