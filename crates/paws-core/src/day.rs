//! # Day Cycle
//!
//! Advances the business day: folds daily money into the running total and
//! zeroes every product's daily sales counter.
//!
//! The original bound this to the summary window's "Next Day" button; here it
//! is a plain operation on the catalog/ledger pair with no preconditions - it
//! always succeeds.

use crate::catalog::Catalog;
use crate::ledger::Ledger;

/// Moves the system to the next day.
///
/// 1. `money_total += money_today`
/// 2. `money_today = 0`
/// 3. `day += 1`
/// 4. every product's `sold_today = 0` (shelf stock and lifetime totals are
///    untouched)
///
/// Returns the new day number. The caller holds `&mut` on both halves of the
/// state, so no purchase can interleave with the fold.
///
/// ## Example
/// ```rust
/// use paws_core::{day, register, Catalog, Ledger, Money, Product};
///
/// let mut catalog = Catalog::new(vec![
///     Product::new("Widget", Money::from_cents(1000), 5).unwrap(),
/// ])
/// .unwrap();
/// let mut ledger = Ledger::new();
///
/// register::purchase(&mut catalog, &mut ledger, "Widget", 3).unwrap();
/// let new_day = day::advance(&mut catalog, &mut ledger);
///
/// assert_eq!(new_day, 2);
/// assert_eq!(ledger.money_total().cents(), 3000);
/// assert_eq!(catalog.get(0).unwrap().sold_today(), 0);
/// ```
pub fn advance(catalog: &mut Catalog, ledger: &mut Ledger) -> u32 {
    let new_day = ledger.roll_over();

    for product in catalog.iter_mut() {
        product.reset_daily();
    }

    new_day
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::product::Product;
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
    fn test_advance_folds_money_and_resets_daily() {
        let (mut catalog, mut ledger) = fixture();
        register::purchase(&mut catalog, &mut ledger, "Widget", 3).unwrap();
        register::purchase(&mut catalog, &mut ledger, "Gadget", 2).unwrap();

        let new_day = advance(&mut catalog, &mut ledger);

        assert_eq!(new_day, 2);
        assert_eq!(ledger.day(), 2);
        assert_eq!(ledger.money_today(), Money::zero());
        assert_eq!(ledger.money_total().cents(), 3000 + 5100);

        for product in catalog.iter() {
            assert_eq!(product.sold_today(), 0);
        }
    }

    #[test]
    fn test_advance_is_never_destructive() {
        let (mut catalog, mut ledger) = fixture();
        register::purchase(&mut catalog, &mut ledger, "Widget", 3).unwrap();

        advance(&mut catalog, &mut ledger);

        let widget = catalog.get(0).unwrap();
        assert_eq!(widget.on_shelf(), 2); // shelf untouched
        assert_eq!(widget.sold_total(), 3); // lifetime total untouched
    }

    #[test]
    fn test_advance_with_no_sales() {
        let (mut catalog, mut ledger) = fixture();

        assert_eq!(advance(&mut catalog, &mut ledger), 2);
        assert_eq!(advance(&mut catalog, &mut ledger), 3);

        assert_eq!(ledger.money_total(), Money::zero());
        assert_eq!(catalog.get(0).unwrap().on_shelf(), 5);
    }

    #[test]
    fn test_day_increments_by_exactly_one() {
        let (mut catalog, mut ledger) = fixture();
        for expected in 2..=10 {
            assert_eq!(advance(&mut catalog, &mut ledger), expected);
        }
    }

    #[test]
    fn test_sales_resume_cleanly_after_advance() {
        let (mut catalog, mut ledger) = fixture();
        register::purchase(&mut catalog, &mut ledger, "Widget", 2).unwrap();
        advance(&mut catalog, &mut ledger);

        register::purchase(&mut catalog, &mut ledger, "Widget", 1).unwrap();

        let widget = catalog.get(0).unwrap();
        assert_eq!(widget.sold_today(), 1);
        assert_eq!(widget.sold_total(), 3);
        assert_eq!(ledger.money_today().cents(), 1000);
        assert_eq!(ledger.money_total().cents(), 2000);
    }
}
