//! # atrium-core: Pure Business Logic for Atrium
//!
//! This crate is the **heart** of Atrium, a guided product-selection wizard
//! for home-automation sales. It contains all business logic as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Atrium Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation (JS)                            │   │
//! │  │    Option grids ──► Counters ──► Summary ──► Mail composer      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    atrium-session                               │   │
//! │  │    select_option, set_requested_pairs, go_next, summary, ...    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ atrium-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  sizing   │  │ validation│  │   │
//! │  │   │ Category  │  │   Money   │  │ units     │  │   rules   │  │   │
//! │  │   │ DeviceOpt │  │  grouping │  │ line cost │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Category, DeviceOption)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`sizing`] - Units-required and cost aggregation math
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole dollars (i64), the
//!    catalog's granularity - no float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use atrium_core::sizing::{line_cost, units_required};
//! use atrium_core::types::{Category, DeviceOption};
//!
//! let amp = DeviceOption {
//!     id: "monoprice16ch".into(),
//!     category: Category::Amplifier,
//!     brand: "Monoprice".into(),
//!     model: "16-Channel Amplifier".into(),
//!     price_dollars: 1300,
//!     max_pairs: Some(16),
//!     max_tvs: None,
//!     rackmount: true,
//!     description: String::new(),
//!     reasoning: String::new(),
//! };
//!
//! // 54 speaker pairs across 16-pair units
//! let units = units_required(&amp, 54).unwrap();
//! assert_eq!(units, 4);
//! assert_eq!(line_cost(&amp, units).dollars(), 5200);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod sizing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use atrium_core::Money` instead of
// `use atrium_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{CapacityKind, Category, DeviceOption};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default requested speaker-pair count for a new session.
///
/// ## Why 54?
/// The product launched against a single large estate project wired for 54
/// speaker pairs; it remains the sensible starting point for the size of
/// installation this tool targets. Sessions adjust it freely.
pub const DEFAULT_SPEAKER_PAIRS: u32 = 54;

/// Default requested TV count for a new session.
pub const DEFAULT_TV_COUNT: u32 = 16;

/// Upper clamp bound for requested speaker pairs.
///
/// The presentation layer clamps inputs to `1..=MAX_SPEAKER_PAIRS` before
/// calling in. The core accepts larger values (the math stays well-defined)
/// but logs them as suspicious.
pub const MAX_SPEAKER_PAIRS: u32 = 128;

/// Upper clamp bound for requested TVs.
pub const MAX_TV_COUNT: u32 = 64;

/// Maximum length of a device option id.
pub const MAX_OPTION_ID_LEN: usize = 50;
