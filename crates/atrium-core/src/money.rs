//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Dollars?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Dollars                                          │
//! │    The entire device catalog is priced at whole-dollar granularity     │
//! │    ($699, $1,300, $8,000), so the smallest unit we carry is one        │
//! │    dollar. Every subtotal and total stays exact.                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use atrium_core::money::Money;
//!
//! // Create from whole dollars (the catalog granularity)
//! let price = Money::from_dollars(1300); // $1,300
//!
//! // Arithmetic operations
//! let stacked = price * 4u32;                     // $5,200
//! let total = stacked + Money::from_dollars(699); // $5,899
//!
//! // Display uses thousands separators, matching the storefront UI
//! assert_eq!(stacked.to_string(), "$5,200");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole dollars.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for credits/adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// DeviceOption.price_dollars ──► line cost (price × units) ──► subtotal
///                                                                  │
///                                                                  ▼
///                                     System Total shown on the summary
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole dollars.
    ///
    /// ## Example
    /// ```rust
    /// use atrium_core::money::Money;
    ///
    /// let price = Money::from_dollars(699);
    /// assert_eq!(price.dollars(), 699);
    /// ```
    #[inline]
    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars)
    }

    /// Returns the value in whole dollars.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use atrium_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a unit count.
    ///
    /// ## Example
    /// ```rust
    /// use atrium_core::money::Money;
    ///
    /// let unit_price = Money::from_dollars(1300); // one amplifier
    /// let line_total = unit_price.multiply_units(4);
    /// assert_eq!(line_total.dollars(), 5200);
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Amplifier: Monoprice 16-Channel $1,300
    /// Units required: 4 (to cover 54 speaker pairs)
    ///      │
    ///      ▼
    /// multiply_units(4) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: $5,200
    /// ```
    #[inline]
    pub const fn multiply_units(&self, units: u32) -> Self {
        Money(self.0 * units as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation renders money the way the storefront UI does:
/// a `$` sign and thousands separators, no decimals.
///
/// ## Example
/// ```rust
/// use atrium_core::money::Money;
///
/// assert_eq!(Money::from_dollars(37746).to_string(), "$37,746");
/// assert_eq!(Money::from_dollars(-550).to_string(), "-$550");
/// ```
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}", sign, group_thousands(self.0.unsigned_abs()))
    }
}

/// Formats an unsigned value with `,` thousands separators.
///
/// Single fixed locale: the product ships to one market, so no locale
/// negotiation is needed (grouping is always 3 digits, always `,`).
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a unit count (for sizing calculations).
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, units: u32) -> Self {
        Money(self.0 * units as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, factor: i64) -> Self {
        Money(self.0 * factor)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
