//! # Error Types
//!
//! Domain-specific error types for paws-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                │
//! │                                                                    │
//! │  paws-core errors (this file)                                      │
//! │  ├── PurchaseError    - Rejected register transactions             │
//! │  ├── CatalogError     - Invalid catalog construction               │
//! │  └── ValidationError  - Input validation failures                  │
//! │                                                                    │
//! │  Flow: ValidationError → PurchaseError → presentation layer        │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, counts, etc.)
//! 3. Errors are enum variants, never String
//! 4. Every rejection is a value the caller can inspect; the core never
//!    panics and has no unrecoverable failures

use thiserror::Error;

// =============================================================================
// Purchase Error
// =============================================================================

/// A purchase transaction that was rejected before any state changed.
///
/// The original program surfaced these as label text ("Purchase Failed:
/// Invalid Name" / "Purchase Failed: Amount Too High"); the `Display` output
/// here carries the same information without dictating the exact wording the
/// presentation layer must show.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// The requested name matches no product in the catalog.
    ///
    /// Lookup is exact, case-sensitive string equality - "canidae" does not
    /// match "CANIDAE Beef & Oatmeal Dry Dog Food".
    #[error("unknown product: {name}")]
    UnknownProduct { name: String },

    /// Requested quantity exceeds current shelf stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Purchase (qty: 5)
    ///      │
    ///      ▼
    /// Check shelf: available=2
    ///      │
    ///      ▼
    /// InsufficientStock { name, available: 2, requested: 5 }
    ///      │
    ///      ▼
    /// UI shows: "Only 2 left on the shelf"
    /// ```
    #[error("insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: u32,
        requested: u32,
    },

    /// Validation error (wraps ValidationError).
    ///
    /// The UI slider constrains quantity to a small positive range, but the
    /// register re-validates because nothing guarantees callers go through
    /// that slider.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Catalog Error
// =============================================================================

/// Errors raised while building a catalog at startup.
///
/// The catalog is fixed after construction, so these can only occur once,
/// before any transaction runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two products share the same name; name is the business key.
    #[error("duplicate product name: {name}")]
    DuplicateName { name: String },

    /// A product failed field validation (empty name, negative price).
    #[error("invalid product {name}: {source}")]
    InvalidProduct {
        name: String,
        #[source]
        source: ValidationError,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Value must be positive (> 0).
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },

    /// Value must not be negative (>= 0).
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: &'static str },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for register transaction results.
pub type PurchaseResult<T> = Result<T, PurchaseError>;

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PurchaseError::InsufficientStock {
            name: "CANIDAE Beef & Oatmeal Dry Dog Food".to_string(),
            available: 2,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stock for CANIDAE Beef & Oatmeal Dry Dog Food: \
             available 2, requested 5"
        );

        let err = PurchaseError::UnknownProduct {
            name: "Mystery Kibble".to_string(),
        };
        assert_eq!(err.to_string(), "unknown product: Mystery Kibble");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive { field: "quantity" };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::Required { field: "name" };
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_validation_converts_to_purchase_error() {
        let validation_err = ValidationError::MustBePositive { field: "quantity" };
        let purchase_err: PurchaseError = validation_err.into();
        assert!(matches!(purchase_err, PurchaseError::Validation(_)));
    }

    #[test]
    fn test_catalog_error_carries_source() {
        let err = CatalogError::InvalidProduct {
            name: "Freebie Treats".to_string(),
            source: ValidationError::MustNotBeNegative { field: "price" },
        };
        assert_eq!(
            err.to_string(),
            "invalid product Freebie Treats: price must not be negative"
        );
    }
}
