//! # Error Types
//!
//! Domain-specific error types for atrium-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  atrium-core errors (this file)                                        │
//! │  ├── CoreError        - Sizing/domain errors                           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  atrium-catalog errors (separate crate)                                │
//! │  └── CatalogError     - Catalog-integrity failures at load time        │
//! │                                                                         │
//! │  atrium-session errors (separate crate)                                │
//! │  └── SessionError     - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → SessionError → Frontend           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (option id, field name)
//! 3. Errors are enum variants, never String
//! 4. A catalog lookup miss is NOT an error: it is `Option::None`
//!    ("nothing selected") so stale ids degrade gracefully

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These represent catalog-integrity violations or rejected inputs reaching
/// the calculator. All of them are recoverable: the worst outcome for the
/// session is "calculation rejected, prior total retained".
#[derive(Debug, Error)]
pub enum CoreError {
    /// An option on a multiplicity category declares a capacity of zero.
    ///
    /// ## When This Occurs
    /// A catalog-authoring error (e.g. an amplifier with `max_pairs: 0`).
    /// The catalog loader rejects such records up front; the calculator
    /// refuses them again rather than dividing by zero.
    #[error("Option {id} declares a per-unit capacity of zero")]
    ZeroCapacity { id: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements.
/// Used for early validation before sizing math runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. an id with forbidden characters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
