//! # Catalog
//!
//! The ordered, fixed collection of products the whole system operates on.
//!
//! The original program kept this as static arrays shared through a class
//! hierarchy; here it is one explicitly owned value. The catalog is sealed at
//! construction: no products are added or removed afterwards, and nothing
//! outside this crate can mutate a product except through the register and
//! day-cycle operations.

use crate::error::CatalogError;
use crate::product::Product;

// =============================================================================
// Catalog
// =============================================================================

/// An ordered, fixed collection of products with unique names.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from an ordered list of products.
    ///
    /// ## Validation
    /// Product-level rules are enforced by [`Product::new`]; this constructor
    /// additionally rejects duplicate names, since the name is the business
    /// key every lookup goes through.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        for (i, product) in products.iter().enumerate() {
            if products[..i].iter().any(|p| p.name() == product.name()) {
                return Err(CatalogError::DuplicateName {
                    name: product.name().to_string(),
                });
            }
        }

        Ok(Catalog { products })
    }

    /// Finds a product by exact name match, scanning in catalog order.
    ///
    /// Returns the index of the first (and, names being unique, only) match.
    /// `Option` replaces the original's `-1` sentinel so a miss can never be
    /// confused with a valid index.
    ///
    /// ## Example
    /// ```rust
    /// use paws_core::{Catalog, Money, Product};
    ///
    /// let catalog = Catalog::new(vec![
    ///     Product::new("Widget", Money::from_cents(1000), 5).unwrap(),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(catalog.find("Widget"), Some(0));
    /// assert_eq!(catalog.find("widget"), None); // exact match only
    /// ```
    pub fn find(&self, name: &str) -> Option<usize> {
        self.products.iter().position(|p| p.name() == name)
    }

    /// Returns a read view of the product at `index`.
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Number of products in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterates products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Mutable product access for the register. Crate-private: the catalog
    /// owns its products exclusively.
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Product> {
        self.products.get_mut(index)
    }

    /// Mutable iteration for the day-cycle reset. Crate-private.
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Product> {
        self.products.iter_mut()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
