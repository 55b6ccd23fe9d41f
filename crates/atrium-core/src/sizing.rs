//! # Sizing Calculator
//!
//! Determines how many physical units of a selected option are needed to
//! satisfy a requested total, and the resulting cost.
//!
//! ## How Sizing Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Units Required                                       │
//! │                                                                         │
//! │  Requested: 54 speaker pairs                                           │
//! │  Selected amplifier: Monoprice 16-Channel (max_pairs = 16)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  units_required = ceil(54 / 16) = 4                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  line_cost = $1,300 × 4 = $5,200                                       │
//! │                                                                         │
//! │  One unit always covers the remainder: a selection never needs         │
//! │  fewer than 1 unit, even when requested <= capacity.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//! For fixed inputs the outputs are pure functions: no hidden state, no
//! randomness, no I/O. Recomputation on every state change is idempotent.

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::DeviceOption;

// =============================================================================
// Units Required
// =============================================================================

/// Returns the number of physical units of `option` needed to cover
/// `requested` (speaker pairs for amplifiers, TVs for matrix switches).
///
/// ## Contract
/// - No multiplicity concept (preamp, lighting parts): always 1 unit.
/// - Capacity `c > 0`: the smallest `u` with `u * c >= requested` (ceiling
///   division), never less than 1.
/// - Capacity `0`: a catalog-authoring error; refused with
///   [`CoreError::ZeroCapacity`] rather than dividing by zero. The catalog
///   loader should have rejected the record already.
/// - `requested == 0`: refused with a validation error; a zero or negative
///   unit count is never produced.
///
/// ## Example
/// ```rust
/// use atrium_core::sizing::units_required;
/// use atrium_core::types::{Category, DeviceOption};
///
/// let amp = DeviceOption {
///     id: "monoprice16ch".into(),
///     category: Category::Amplifier,
///     brand: "Monoprice".into(),
///     model: "16-Channel Amplifier".into(),
///     price_dollars: 1300,
///     max_pairs: Some(16),
///     max_tvs: None,
///     rackmount: true,
///     description: String::new(),
///     reasoning: String::new(),
/// };
///
/// assert_eq!(units_required(&amp, 54).unwrap(), 4);
/// assert_eq!(units_required(&amp, 16).unwrap(), 1);
/// assert_eq!(units_required(&amp, 17).unwrap(), 2);
/// ```
pub fn units_required(option: &DeviceOption, requested: u32) -> CoreResult<u32> {
    if requested == 0 {
        return Err(ValidationError::MustBePositive {
            field: "requested count".to_string(),
        }
        .into());
    }

    match option.capacity() {
        // Single-unit categories: one preamp, one controller, one spool.
        None => Ok(1),
        Some(0) => Err(CoreError::ZeroCapacity {
            id: option.id.clone(),
        }),
        Some(capacity) => Ok(requested.div_ceil(capacity)),
    }
}

// =============================================================================
// Cost Aggregation
// =============================================================================

/// Cost of stacking `units` of `option`: `price × units`.
///
/// ## Example
/// ```rust
/// use atrium_core::money::Money;
/// use atrium_core::sizing::line_cost;
/// use atrium_core::types::{Category, DeviceOption};
///
/// let matrix = DeviceOption {
///     id: "wyrestorm16x16".into(),
///     category: Category::Matrix,
///     brand: "Wyrestorm".into(),
///     model: "MXV-1616-H2A".into(),
///     price_dollars: 8000,
///     max_pairs: None,
///     max_tvs: Some(16),
///     rackmount: true,
///     description: String::new(),
///     reasoning: String::new(),
/// };
///
/// assert_eq!(line_cost(&matrix, 2), Money::from_dollars(16000));
/// ```
#[inline]
pub fn line_cost(option: &DeviceOption, units: u32) -> Money {
    option.price().multiply_units(units)
}

/// Units and cost for one selected option against a requested count.
///
/// Convenience for callers that always want the pair; the session's summary
/// builder uses this per category.
pub fn size_selection(option: &DeviceOption, requested: u32) -> CoreResult<(u32, Money)> {
    let units = units_required(option, requested)?;
    Ok((units, line_cost(option, units)))
}

// =============================================================================
// Unit Tests
// =============================================================================
