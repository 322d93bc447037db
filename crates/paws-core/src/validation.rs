//! # Validation Module
//!
//! Input validation for register transactions and catalog construction.
//!
//! ## Validation Strategy
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                             │
//! │                                                                    │
//! │  Layer 1: Presentation (external)                                  │
//! │  ├── Slider bounds the purchase quantity (e.g. 1-50)               │
//! │  └── Immediate user feedback                                       │
//! │           │                                                        │
//! │           ▼                                                        │
//! │  Layer 2: THIS MODULE                                              │
//! │  ├── Re-validates independently of whatever the UI promised        │
//! │  └── Catalog construction rules (names, prices)                    │
//! │                                                                    │
//! │  The core trusts nothing about its callers.                        │
//! └────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a purchase quantity.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// The upper bound is a presentation concern (the original slider stopped at
/// 50); the register only cares that the shelf can cover the request, which
/// the stock check enforces separately.
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive { field: "quantity" });
    }

    Ok(())
}

/// Validates a unit price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (promotional items)
///
/// ## Example
/// ```rust
/// use paws_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(5078).is_ok());  // $50.78
/// assert!(validate_price_cents(0).is_ok());     // Free sample
/// assert!(validate_price_cents(-100).is_err()); // Invalid
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustNotBeNegative { field: "price" });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or all whitespace
///
/// Names are the catalog's business key, matched by exact string equality.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
