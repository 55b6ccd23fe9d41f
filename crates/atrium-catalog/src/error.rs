//! # Catalog Error Types
//!
//! Integrity failures at the catalog load boundary.
//!
//! ## Design Principles
//! 1. Catalog integrity is validated ONCE, when the catalog is built -
//!    not at calculation time
//! 2. A lookup miss is NOT represented here: it is `Option::None`
//! 3. Every variant names the offending record so a catalog author can
//!    find it

use atrium_core::{Category, ValidationError};
use thiserror::Error;

/// Catalog load/integrity errors.
///
/// All of these are fatal at the data-validation boundary: a catalog that
/// fails integrity checks is never handed to a session.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog JSON document could not be parsed.
    #[error("Failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// An option on a multiplicity category declares a capacity of zero.
    ///
    /// ## When This Occurs
    /// A catalog-authoring error, e.g. an amplifier with `max_pairs: 0`.
    /// Caught here so the calculator never sees it.
    #[error("Option {id} in {category}: per-unit capacity must be positive")]
    ZeroCapacity { category: Category, id: String },

    /// An option on a multiplicity category has no capacity at all.
    ///
    /// An amplifier without `max_pairs` (or a matrix without `max_tvs`)
    /// cannot be sized; treat it as an authoring error rather than
    /// silently pricing a single unit.
    #[error("Option {id} in {category} declares multiplicity but no capacity")]
    MissingCapacity { category: Category, id: String },

    /// An option id appears twice within one category.
    #[error("Duplicate option id {id} in {category}")]
    DuplicateId { category: Category, id: String },

    /// An option record failed field validation (id format, price sign).
    #[error("Option {id}: {source}")]
    InvalidRecord {
        id: String,
        #[source]
        source: ValidationError,
    },
}

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_record() {
        let err = CatalogError::ZeroCapacity {
            category: Category::Amplifier,
            id: "monoprice16ch".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Option monoprice16ch in Amplifier(s): per-unit capacity must be positive"
        );

        let err = CatalogError::DuplicateId {
            category: Category::Matrix,
            id: "atlona16x16".to_string(),
        };
        assert!(err.to_string().contains("atlona16x16"));
    }
}
