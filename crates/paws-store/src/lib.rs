//! # paws-store: State Boundary for Paws POS
//!
//! Owns the one catalog/ledger pair for the process lifetime and exposes the
//! snapshot API the presentation layer consumes:
//!
//! - [`StoreState::purchase`] - sell stock, accrue daily money
//! - [`StoreState::advance_day`] - roll daily figures into totals
//! - [`StoreState::catalog_snapshot`] - full product table
//! - [`StoreState::refill_list`] - low-stock table
//! - [`StoreState::ledger_snapshot`] - day / money labels
//!
//! All business rules live in `paws-core`; this crate adds the single
//! mutual-exclusion boundary (one `RwLock`) that makes purchases and day
//! advances atomic with respect to each other and to queries, plus the
//! seeded default catalog.
//!
//! ## Example
//! ```rust
//! use paws_store::{seed, StoreState};
//!
//! let state = StoreState::new(seed::pet_supply_catalog().unwrap());
//!
//! let receipt = state
//!     .purchase("CANIDAE Beef & Oatmeal Dry Dog Food", 2)
//!     .unwrap();
//! assert_eq!(receipt.line_total.cents(), 7498);
//!
//! assert_eq!(state.advance_day(), 2);
//! assert_eq!(state.ledger_snapshot().money_total.cents(), 7498);
//! ```

pub mod seed;
pub mod store;

pub use store::{Store, StoreState};
