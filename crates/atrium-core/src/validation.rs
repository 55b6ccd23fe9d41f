//! # Validation Module
//!
//! Input validation utilities for Atrium.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (JS)                                            │
//! │  ├── Clamps numeric inputs to the documented ranges                    │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Session surface (Rust)                                       │
//! │  └── THIS MODULE: positivity + format checks                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog load                                                 │
//! │  └── Integrity checks (capacity, price, duplicate ids)                 │
//! │                                                                         │
//! │  The core rejects only what would make the arithmetic nonsensical      │
//! │  (non-positive counts). Values beyond the UI clamp ranges flow         │
//! │  through: the ceiling math stays well-defined for any positive count.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_OPTION_ID_LEN, MAX_SPEAKER_PAIRS, MAX_TV_COUNT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a device option id.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
/// - Should contain only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use atrium_core::validation::validate_option_id;
///
/// assert!(validate_option_id("sonosamp").is_ok());
/// assert!(validate_option_id("atlona16x16").is_ok());
/// assert!(validate_option_id("").is_err());
/// ```
pub fn validate_option_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "option id".to_string(),
        });
    }

    if id.len() > MAX_OPTION_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "option id".to_string(),
            max: MAX_OPTION_ID_LEN,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "option id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a requested speaker-pair count.
///
/// Non-positive counts are a hard error (the ceiling math would produce a
/// nonsensical zero-unit answer). Counts beyond [`MAX_SPEAKER_PAIRS`] are
/// the presentation layer's job to clamp; here they pass.
pub fn validate_requested_pairs(pairs: u32) -> ValidationResult<()> {
    if pairs == 0 {
        return Err(ValidationError::MustBePositive {
            field: "requested speaker pairs".to_string(),
        });
    }

    Ok(())
}

/// Validates a requested TV count. Same contract as
/// [`validate_requested_pairs`].
pub fn validate_requested_tvs(tvs: u32) -> ValidationResult<()> {
    if tvs == 0 {
        return Err(ValidationError::MustBePositive {
            field: "requested TVs".to_string(),
        });
    }

    Ok(())
}

/// Whether a requested pair count sits inside the documented UI clamp range.
///
/// Informational only: the session logs a warning for out-of-range values
/// but still accepts them.
pub fn pairs_in_clamp_range(pairs: u32) -> bool {
    (1..=MAX_SPEAKER_PAIRS).contains(&pairs)
}

/// Whether a requested TV count sits inside the documented UI clamp range.
pub fn tvs_in_clamp_range(tvs: u32) -> bool {
    (1..=MAX_TV_COUNT).contains(&tvs)
}

/// Validates a price in whole dollars.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (bundled/no-charge items)
pub fn validate_price_dollars(dollars: i64) -> ValidationResult<()> {
    if dollars < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
