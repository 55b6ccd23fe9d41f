//! # Catalog Store
//!
//! The immutable, read-only table of device option records.
//!
//! ## Lookup Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Lookup                                       │
//! │                                                                         │
//! │  lookup(Amplifier, "sonosamp")                                         │
//! │       │                                                                 │
//! │       ├── found ────► Some(&DeviceOption)                              │
//! │       │                                                                 │
//! │       └── missing ──► None  (= "nothing selected")                     │
//! │                                                                         │
//! │  A stale id (e.g. after catalog edits between releases) must degrade   │
//! │  gracefully to an empty selection - NEVER a fatal error.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Integrity
//! All integrity checks run in [`Catalog::from_options`], once, at load
//! time. A catalog that validates is guaranteed safe for the sizing
//! calculator: every multiplicity option has a positive capacity.

use atrium_core::validation::{validate_option_id, validate_price_dollars};
use atrium_core::{Category, DeviceOption};
use std::collections::HashSet;
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};

/// The read-only device catalog.
///
/// Holds every option across all categories, preserving the authoring
/// order within each category (the order the presentation layer shows the
/// option cards in).
#[derive(Debug, Clone)]
pub struct Catalog {
    options: Vec<DeviceOption>,
}

impl Catalog {
    /// Builds a catalog from option records, validating integrity.
    ///
    /// ## Checks (fatal at this boundary)
    /// - id format and price sign per record
    /// - no duplicate ids within a category
    /// - every amplifier has a positive `max_pairs`, every matrix a
    ///   positive `max_tvs`
    ///
    /// ## Example
    /// ```rust
    /// use atrium_catalog::Catalog;
    /// use atrium_core::{Category, DeviceOption};
    ///
    /// let options = vec![DeviceOption {
    ///     id: "marantz7706".into(),
    ///     category: Category::Preamp,
    ///     brand: "Marantz".into(),
    ///     model: "AV7706".into(),
    ///     price_dollars: 2300,
    ///     max_pairs: None,
    ///     max_tvs: None,
    ///     rackmount: true,
    ///     description: String::new(),
    ///     reasoning: String::new(),
    /// }];
    ///
    /// let catalog = Catalog::from_options(options).unwrap();
    /// assert!(catalog.lookup(Category::Preamp, "marantz7706").is_some());
    /// ```
    pub fn from_options(options: Vec<DeviceOption>) -> CatalogResult<Self> {
        let mut seen: HashSet<(Category, String)> = HashSet::new();

        for option in &options {
            validate_option_id(&option.id).map_err(|source| CatalogError::InvalidRecord {
                id: option.id.clone(),
                source,
            })?;
            validate_price_dollars(option.price_dollars).map_err(|source| {
                CatalogError::InvalidRecord {
                    id: option.id.clone(),
                    source,
                }
            })?;

            if !seen.insert((option.category, option.id.clone())) {
                return Err(CatalogError::DuplicateId {
                    category: option.category,
                    id: option.id.clone(),
                });
            }

            // Multiplicity categories must carry a usable capacity so the
            // calculator never divides by zero downstream.
            if option.category.capacity_kind().is_some() {
                match option.capacity() {
                    Some(0) => {
                        return Err(CatalogError::ZeroCapacity {
                            category: option.category,
                            id: option.id.clone(),
                        })
                    }
                    None => {
                        return Err(CatalogError::MissingCapacity {
                            category: option.category,
                            id: option.id.clone(),
                        })
                    }
                    Some(_) => {}
                }
            }
        }

        debug!(options = options.len(), "Catalog validated");
        Ok(Catalog { options })
    }

    /// Parses and validates a catalog from a JSON document.
    ///
    /// The document is an array of option records; see `data/catalog.json`
    /// for the shape.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let options: Vec<DeviceOption> = serde_json::from_str(json)?;
        Catalog::from_options(options)
    }

    /// Looks up an option by category and id.
    ///
    /// Returns `None` when the id does not exist in that category's list -
    /// callers treat this as "no selection", never as a fatal error.
    pub fn lookup(&self, category: Category, id: &str) -> Option<&DeviceOption> {
        let hit = self
            .options
            .iter()
            .find(|o| o.category == category && o.id == id);

        if hit.is_none() {
            debug!(%category, id, "Catalog lookup miss");
        }

        hit
    }

    /// All options in a category, in authoring order.
    pub fn options(&self, category: Category) -> Vec<&DeviceOption> {
        self.options
            .iter()
            .filter(|o| o.category == category)
            .collect()
    }

    /// Total number of option records across all categories.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the catalog holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn option(category: Category, id: &str) -> DeviceOption {
        let (max_pairs, max_tvs) = match category {
            Category::Amplifier => (Some(16), None),
            Category::Matrix => (None, Some(16)),
            _ => (None, None),
        };
        DeviceOption {
            id: id.to_string(),
            category,
            brand: "Brand".to_string(),
            model: "Model".to_string(),
            price_dollars: 100,
            max_pairs,
            max_tvs,
            rackmount: false,
            description: String::new(),
            reasoning: String::new(),
        }
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let catalog =
            Catalog::from_options(vec![option(Category::Preamp, "marantz7706")]).unwrap();

        assert!(catalog.lookup(Category::Preamp, "marantz7706").is_some());
        // missing id degrades to None, not an error
        assert!(catalog.lookup(Category::Preamp, "retired-model").is_none());
        // right id, wrong category is also a miss
        assert!(catalog.lookup(Category::Amplifier, "marantz7706").is_none());
    }

    #[test]
    fn test_options_preserve_authoring_order() {
        let catalog = Catalog::from_options(vec![
            option(Category::Amplifier, "first"),
            option(Category::Preamp, "other-category"),
            option(Category::Amplifier, "second"),
        ])
        .unwrap();

        let amps = catalog.options(Category::Amplifier);
        let ids: Vec<&str> = amps.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn test_zero_capacity_rejected_at_load() {
        let mut amp = option(Category::Amplifier, "broken");
        amp.max_pairs = Some(0);

        let err = Catalog::from_options(vec![amp]).unwrap_err();
        assert!(matches!(err, CatalogError::ZeroCapacity { .. }));
    }

    #[test]
    fn test_missing_capacity_rejected_at_load() {
        let mut matrix = option(Category::Matrix, "no-size");
        matrix.max_tvs = None;

        let err = Catalog::from_options(vec![matrix]).unwrap_err();
        assert!(matches!(err, CatalogError::MissingCapacity { .. }));
    }

    #[test]
    fn test_duplicate_id_rejected_at_load() {
        let err = Catalog::from_options(vec![
            option(Category::Preamp, "twice"),
            option(Category::Preamp, "twice"),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { .. }));
    }

    #[test]
    fn test_same_id_in_different_categories_is_fine() {
        // ids are unique within a category, not globally
        let catalog = Catalog::from_options(vec![
            option(Category::Preamp, "shared"),
            option(Category::Controller, "shared"),
        ])
        .unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_negative_price_rejected_at_load() {
        let mut preamp = option(Category::Preamp, "refund");
        preamp.price_dollars = -1;

        let err = Catalog::from_options(vec![preamp]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRecord { .. }));
    }

    #[test]
    fn test_from_json_parse_error() {
        let err = Catalog::from_json("not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
