//! # Seed Catalog
//!
//! The fixed five-product pet-supply catalog the shop opens with: the same
//! names, prices, and shelf counts the original program shipped in its static
//! arrays. The catalog is sealed at startup (no add/remove), so this is the
//! one place product data enters the system.

use paws_core::{Catalog, CatalogError, Money, Product};

/// Name, price in cents, initial shelf stock.
const PET_SUPPLY_PRODUCTS: &[(&str, i64, u32)] = &[
    (
        "Blue Buffalo Wilderness Natural Adult High Protein Grain Free \
         Chicken Dry Dog Food",
        5078,
        15,
    ),
    ("CANIDAE Beef & Oatmeal Dry Dog Food", 3749, 9),
    (
        "Merrick Full Source Raw-Coated Kibble Real Salmon & Whitefish \
         with Healthy Grains Dry Dog Food",
        7499,
        18,
    ),
    (
        "Instinct Raw Boost Whole Grain Real Chicken & Brown Rice Recipe \
         Dry Dog Food with Freeze-Dried Raw Pieces",
        5199,
        5,
    ),
    (
        "Hill's Science Diet Adult Light Large Breed with Chicken Meal & \
         Barley Dry Dog Food",
        3799,
        12,
    ),
];

/// Builds the default pet-supply catalog.
///
/// Returns `Err` only if the seed table itself is inconsistent, which the
/// tests below rule out.
pub fn pet_supply_catalog() -> Result<Catalog, CatalogError> {
    let products = PET_SUPPLY_PRODUCTS
        .iter()
        .map(|&(name, price_cents, on_shelf)| {
            Product::new(name, Money::from_cents(price_cents), on_shelf)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Catalog::new(products)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_builds() {
        let catalog = pet_supply_catalog().unwrap();
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_seed_catalog_matches_original_data() {
        let catalog = pet_supply_catalog().unwrap();

        let canidae = catalog
            .get(catalog.find("CANIDAE Beef & Oatmeal Dry Dog Food").unwrap())
            .unwrap();
        assert_eq!(canidae.price().cents(), 3749);
        assert_eq!(canidae.on_shelf(), 9);

        // Lowest-stocked product in the seed data
        let instinct_idx = 3;
        let instinct = catalog.get(instinct_idx).unwrap();
        assert!(instinct.name().starts_with("Instinct Raw Boost"));
        assert_eq!(instinct.on_shelf(), 5);
        assert_eq!(instinct.price().cents(), 5199);
    }

    #[test]
    fn test_seed_catalog_starts_with_fresh_counters() {
        let catalog = pet_supply_catalog().unwrap();
        for product in catalog.iter() {
            assert_eq!(product.sold_today(), 0);
            assert_eq!(product.sold_total(), 0);
            assert_eq!(product.earned_total(), Money::zero());
        }
    }
}
