//! # paws-core: Pure Business Logic for Paws POS
//!
//! This crate is the **heart** of Paws POS, a small retail manager for a pet
//! supply shop. It contains all business logic as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                       Paws POS Architecture                          │
//! │                                                                      │
//! │  ┌──────────────────────────────────────────────────────────────┐    │
//! │  │              Presentation Layer (external)                   │    │
//! │  │   Register view ──► Supply Summary view ──► Refill table     │    │
//! │  └─────────────────────────────┬────────────────────────────────┘    │
//! │                                │ snapshot API                        │
//! │  ┌─────────────────────────────▼────────────────────────────────┐    │
//! │  │                  paws-store (state boundary)                 │    │
//! │  │        one RwLock around { Catalog, Ledger }                 │    │
//! │  └─────────────────────────────┬────────────────────────────────┘    │
//! │                                │                                     │
//! │  ┌─────────────────────────────▼────────────────────────────────┐    │
//! │  │              ★ paws-core (THIS CRATE) ★                      │    │
//! │  │                                                              │    │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌────────┐  │    │
//! │  │  │ catalog │ │ ledger  │ │register │ │   day   │ │ refill │  │    │
//! │  │  │ Product │ │  Money  │ │purchase │ │ advance │ │ query  │  │    │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └────────┘  │    │
//! │  │                                                              │    │
//! │  │  NO I/O • NO LOCKS • NO UI • PURE FUNCTIONS                  │    │
//! │  └──────────────────────────────────────────────────────────────┘    │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`product`] - Product identity + shelf/sales counters
//! - [`catalog`] - Ordered, fixed product collection with name lookup
//! - [`ledger`] - Day counter, daily and cumulative earnings
//! - [`register`] - The purchase transaction
//! - [`day`] - Day advance (fold daily figures into totals)
//! - [`refill`] - Low-stock query
//! - [`snapshot`] - Read-only DTOs for the presentation layer
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic over the state
//!    handed in via `&`/`&mut`
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid
//!    float errors
//! 4. **Explicit Errors**: All rejections are typed values, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use paws_core::{day, refill, register, Catalog, Ledger, Money, Product};
//!
//! let mut catalog = Catalog::new(vec![
//!     Product::new("Widget", Money::from_cents(1000), 5).unwrap(),
//! ])
//! .unwrap();
//! let mut ledger = Ledger::new();
//!
//! register::purchase(&mut catalog, &mut ledger, "Widget", 3).unwrap();
//! assert_eq!(ledger.money_today().cents(), 3000);
//!
//! day::advance(&mut catalog, &mut ledger);
//! assert_eq!(ledger.day(), 2);
//! assert_eq!(ledger.money_total().cents(), 3000);
//!
//! let low = refill::below_threshold(&catalog, 2);
//! assert_eq!(low[0].name, "Widget"); // 2 left on the shelf
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod day;
pub mod error;
pub mod ledger;
pub mod money;
pub mod product;
pub mod refill;
pub mod register;
pub mod snapshot;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use paws_core::Money` instead of
// `use paws_core::money::Money`

pub use catalog::Catalog;
pub use error::{CatalogError, PurchaseError, PurchaseResult, ValidationError};
pub use ledger::Ledger;
pub use money::Money;
pub use product::Product;
pub use register::Receipt;
pub use snapshot::{LedgerSnapshot, ProductSnapshot, RefillEntry};
