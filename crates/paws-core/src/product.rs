//! # Product Type
//!
//! A catalog entry: immutable identity plus the mutable shelf/sales counters
//! every transaction revolves around.
//!
//! ## Counter Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Product Counters                               │
//! │                                                                     │
//! │  purchase(qty)            advance day                               │
//! │  ─────────────            ───────────                               │
//! │  on_shelf    -= qty       on_shelf    unchanged                     │
//! │  sold_today  += qty       sold_today  = 0                           │
//! │  sold_total  += qty       sold_total  unchanged                     │
//! │                                                                     │
//! │  Invariants: sold_today <= sold_total, on_shelf never negative      │
//! │  (unsigned counters make "never negative" unrepresentable;          │
//! │   the register rejects over-stock requests before mutating)         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fields are private: only the register and day-cycle operations inside this
//! crate mutate a product. External code reads through accessors or the
//! snapshot DTOs.

use crate::error::{CatalogError, ValidationError};
use crate::money::Money;
use crate::validation::{validate_price_cents, validate_product_name};

// =============================================================================
// Product
// =============================================================================

/// A product on the shelf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Business key, unique within the catalog, immutable.
    name: String,

    /// Unit price in cents, immutable, never negative.
    price_cents: i64,

    /// Units currently on the shelf.
    on_shelf: u32,

    /// Units sold since the last day advance.
    sold_today: u32,

    /// Units sold since the catalog was created.
    sold_total: u32,
}

impl Product {
    /// Creates a product with fresh sales counters.
    ///
    /// ## Validation
    /// - `name` must be non-empty
    /// - `price` must not be negative
    ///
    /// ## Example
    /// ```rust
    /// use paws_core::{Money, Product};
    ///
    /// let p = Product::new("CANIDAE Beef & Oatmeal Dry Dog Food", Money::from_cents(3749), 9)
    ///     .unwrap();
    /// assert_eq!(p.on_shelf(), 9);
    /// assert_eq!(p.sold_total(), 0);
    /// ```
    pub fn new(
        name: impl Into<String>,
        price: Money,
        on_shelf: u32,
    ) -> Result<Self, CatalogError> {
        let name = name.into();

        let check = |res: Result<(), ValidationError>| -> Result<(), CatalogError> {
            res.map_err(|source| CatalogError::InvalidProduct {
                name: name.clone(),
                source,
            })
        };
        check(validate_product_name(&name))?;
        check(validate_price_cents(price.cents()))?;

        Ok(Product {
            name,
            price_cents: price.cents(),
            on_shelf,
            sold_today: 0,
            sold_total: 0,
        })
    }

    /// The product's name (business key).
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Units currently on the shelf.
    #[inline]
    pub const fn on_shelf(&self) -> u32 {
        self.on_shelf
    }

    /// Units sold since the last day advance.
    #[inline]
    pub const fn sold_today(&self) -> u32 {
        self.sold_today
    }

    /// Units sold since the catalog was created.
    #[inline]
    pub const fn sold_total(&self) -> u32 {
        self.sold_total
    }

    /// Lifetime revenue for this product: `price × sold_total`.
    ///
    /// Both tables in the original summary window display this column.
    #[inline]
    pub fn earned_total(&self) -> Money {
        self.price().multiply_quantity(self.sold_total as i64)
    }

    /// Checks whether the shelf can cover a requested quantity.
    #[inline]
    pub const fn can_sell(&self, quantity: u32) -> bool {
        quantity <= self.on_shelf
    }

    /// Applies a sale of `quantity` units to this product's counters.
    ///
    /// Callers must have already checked `can_sell`; this is the mutation half
    /// of the register's check-then-mutate sequence and is crate-private so
    /// the check can never be skipped from outside.
    pub(crate) fn record_sale(&mut self, quantity: u32) {
        debug_assert!(self.can_sell(quantity));
        self.on_shelf -= quantity;
        self.sold_today += quantity;
        self.sold_total += quantity;
    }

    /// Zeroes the daily counter at a day boundary. Shelf stock and the
    /// lifetime total are untouched.
    pub(crate) fn reset_daily(&mut self) {
        self.sold_today = 0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
