//! # Ledger
//!
//! The running money record: which day it is, what was earned today, and what
//! has been earned across all days.
//!
//! ## Lifecycle
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  created once at startup: day=1, money_today=0, money_total=0     │
//! │                                                                   │
//! │  purchase ──► money_today += line total                           │
//! │                                                                   │
//! │  advance  ──► money_total += money_today                          │
//! │               money_today  = 0                                    │
//! │               day         += 1                                    │
//! │                                                                   │
//! │  money_total is monotonically non-decreasing; day has no upper    │
//! │  bound and never wraps                                            │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutation is crate-private: only the register (record a sale) and the
//! day cycler (roll over) touch these fields.

use crate::money::Money;

// =============================================================================
// Ledger
// =============================================================================

/// Daily and cumulative earnings, plus the current day number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    /// Current day, starting at 1.
    day: u32,

    /// Earnings since the last day advance.
    money_today: Money,

    /// Cumulative earnings across all completed and current days.
    money_total: Money,
}

impl Ledger {
    /// Creates the ledger at day 1 with no earnings.
    pub fn new() -> Self {
        Ledger {
            day: 1,
            money_today: Money::zero(),
            money_total: Money::zero(),
        }
    }

    /// The current day number (>= 1).
    #[inline]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Earnings since the last day advance.
    #[inline]
    pub const fn money_today(&self) -> Money {
        self.money_today
    }

    /// Cumulative earnings across all days.
    #[inline]
    pub const fn money_total(&self) -> Money {
        self.money_total
    }

    /// Accrues a completed sale into today's earnings.
    pub(crate) fn record_sale(&mut self, amount: Money) {
        self.money_today += amount;
    }

    /// Folds today's earnings into the running total, zeroes the daily
    /// figure, and moves to the next day. Returns the new day number.
    pub(crate) fn roll_over(&mut self) -> u32 {
        self.money_total += self.money_today;
        self.money_today = Money::zero();
        self.day += 1;
        self.day
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Ledger::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ledger() {
        let ledger = Ledger::new();
        assert_eq!(ledger.day(), 1);
        assert_eq!(ledger.money_today(), Money::zero());
        assert_eq!(ledger.money_total(), Money::zero());
    }

    #[test]
    fn test_record_sale_accrues_today_only() {
        let mut ledger = Ledger::new();
        ledger.record_sale(Money::from_cents(3000));
        ledger.record_sale(Money::from_cents(500));

        assert_eq!(ledger.money_today().cents(), 3500);
        assert_eq!(ledger.money_total(), Money::zero());
        assert_eq!(ledger.day(), 1);
    }

    #[test]
    fn test_roll_over_folds_and_resets() {
        let mut ledger = Ledger::new();
        ledger.record_sale(Money::from_cents(3000));

        let new_day = ledger.roll_over();

        assert_eq!(new_day, 2);
        assert_eq!(ledger.day(), 2);
        assert_eq!(ledger.money_today(), Money::zero());
        assert_eq!(ledger.money_total().cents(), 3000);
    }

    #[test]
    fn test_roll_over_with_no_sales() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.roll_over(), 2);
        assert_eq!(ledger.money_total(), Money::zero());
    }

    #[test]
    fn test_total_is_monotone_across_days() {
        let mut ledger = Ledger::new();
        let mut last_total = Money::zero();

        for day_sales in [3000_i64, 0, 12550, 1] {
            ledger.record_sale(Money::from_cents(day_sales));
            ledger.roll_over();
            assert!(ledger.money_total() >= last_total);
            last_total = ledger.money_total();
        }

        assert_eq!(ledger.day(), 5);
        assert_eq!(ledger.money_total().cents(), 15551);
    }
}
