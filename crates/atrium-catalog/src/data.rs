//! # Built-in Catalog Data
//!
//! The estate data set embedded in the binary, parsed and validated at
//! startup.
//!
//! ## Why Embedded?
//! The catalog is a static, read-only data set the core receives at
//! initialization. Embedding it keeps the session layer free of file I/O;
//! a host that wants a different data set passes its own JSON through
//! [`Catalog::from_json`](crate::Catalog::from_json).

use crate::error::CatalogResult;
use crate::store::Catalog;

/// The built-in catalog document (see `data/catalog.json`).
const CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Parses and validates the built-in catalog.
///
/// ## Example
/// ```rust
/// use atrium_catalog::builtin;
/// use atrium_core::Category;
///
/// let catalog = builtin().expect("built-in catalog is valid");
/// assert!(catalog.lookup(Category::Amplifier, "sonosamp").is_some());
/// ```
pub fn builtin() -> CatalogResult<Catalog> {
    Catalog::from_json(CATALOG_JSON)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_core::Category;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = builtin().unwrap();
        assert_eq!(catalog.len(), 15);
    }

    #[test]
    fn test_builtin_catalog_contents() {
        let catalog = builtin().unwrap();

        // the A/V page
        assert_eq!(catalog.options(Category::Preamp).len(), 2);
        assert_eq!(catalog.options(Category::Amplifier).len(), 3);
        assert_eq!(catalog.options(Category::Matrix).len(), 2);

        // the lighting page
        assert_eq!(catalog.options(Category::LightingStrip).len(), 3);
        assert_eq!(catalog.options(Category::Mount).len(), 2);
        assert_eq!(catalog.options(Category::Driver).len(), 1);
        assert_eq!(catalog.options(Category::Controller).len(), 2);
    }

    #[test]
    fn test_builtin_amplifier_capacities() {
        let catalog = builtin().unwrap();

        let monoprice = catalog
            .lookup(Category::Amplifier, "monoprice16ch")
            .unwrap();
        assert_eq!(monoprice.capacity(), Some(16));
        assert_eq!(monoprice.price_dollars, 1300);

        let sonos = catalog.lookup(Category::Amplifier, "sonosamp").unwrap();
        assert_eq!(sonos.capacity(), Some(1));
        assert_eq!(sonos.price_dollars, 699);
        assert!(!sonos.rackmount);
    }

    #[test]
    fn test_builtin_matrix_capacities() {
        let catalog = builtin().unwrap();

        let wyrestorm = catalog.lookup(Category::Matrix, "wyrestorm16x16").unwrap();
        assert_eq!(wyrestorm.capacity(), Some(16));
        assert_eq!(wyrestorm.price_dollars, 8000);
    }
}
