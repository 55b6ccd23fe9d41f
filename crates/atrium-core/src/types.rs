//! # Domain Types
//!
//! Core domain types used throughout Atrium.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │  DeviceOption   │   │  CapacityKind   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Preamp         │   │  id             │   │  SpeakerPairs   │       │
//! │  │  Amplifier      │   │  category       │   │  Televisions    │       │
//! │  │  Matrix         │   │  brand, model   │   │                 │       │
//! │  │  LightingStrip  │   │  price_dollars  │   │  (what a unit's │       │
//! │  │  Mount          │   │  max_pairs      │   │   capacity      │       │
//! │  │  Driver         │   │  max_tvs        │   │   counts)       │       │
//! │  │  Controller     │   │  description    │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Exclusive Choice
//! A `Category` is one slot in the configurator: at most one `DeviceOption`
//! may be selected per category at a time.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// An equipment category: one slot in the configurator.
///
/// The first three are the *system* categories whose line costs fold into
/// the System Total on the summary page. The lighting sub-categories are
/// independent single-unit selections priced individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Preamp / processor / receiver. Single unit, no multiplicity.
    Preamp,
    /// Distribution amplifier. Stacked to cover the requested speaker pairs.
    Amplifier,
    /// HDMI matrix switch. Stacked to cover the requested TV count.
    Matrix,
    /// LED strip (lighting page).
    LightingStrip,
    /// Strip mounting hardware (lighting page).
    Mount,
    /// LED power driver (lighting page).
    Driver,
    /// Lighting controller (lighting page).
    Controller,
}

/// What a unit's capacity counts, for categories with a multiplicity concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CapacityKind {
    /// Speaker pairs one amplifier unit can drive.
    SpeakerPairs,
    /// Displays one matrix unit can address.
    Televisions,
}

impl Category {
    /// All categories in display order (A/V page first, then lighting).
    pub const ALL: [Category; 7] = [
        Category::Preamp,
        Category::Amplifier,
        Category::Matrix,
        Category::LightingStrip,
        Category::Mount,
        Category::Driver,
        Category::Controller,
    ];

    /// The categories whose line costs fold into the System Total.
    ///
    /// Lighting selections are deliberately excluded: the storefront prices
    /// them per line on the summary but never adds them to the grand total.
    pub const SYSTEM: [Category; 3] = [Category::Preamp, Category::Amplifier, Category::Matrix];

    /// Human-readable section label, as shown on the option grids.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Preamp => "Preamp/Processor/Receiver",
            Category::Amplifier => "Amplifier(s)",
            Category::Matrix => "HDMI Matrix Switch",
            Category::LightingStrip => "LED Strip",
            Category::Mount => "Mounting",
            Category::Driver => "Power Driver",
            Category::Controller => "Lighting Controller",
        }
    }

    /// Returns the capacity concept this category carries, if any.
    ///
    /// `None` means a selection in this category is always a single unit
    /// (a preamp, a spool of LED strip, a wall controller).
    pub fn capacity_kind(&self) -> Option<CapacityKind> {
        match self {
            Category::Amplifier => Some(CapacityKind::SpeakerPairs),
            Category::Matrix => Some(CapacityKind::Televisions),
            _ => None,
        }
    }

    /// Whether this category's line cost folds into the System Total.
    #[inline]
    pub fn is_system(&self) -> bool {
        Category::SYSTEM.contains(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Device Option
// =============================================================================

/// A purchasable product record within a category.
///
/// ## Immutability
/// The catalog is append-only at process start and never mutated at
/// runtime; a `DeviceOption` is a frozen record. Display text
/// (`description`, `reasoning`) is carried for the presentation layer and
/// never used in computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DeviceOption {
    /// Unique identifier within its category (e.g. "sonosamp").
    pub id: String,

    /// The category slot this option belongs to.
    pub category: Category,

    /// Manufacturer display name.
    pub brand: String,

    /// Model display name.
    pub model: String,

    /// Price in whole dollars (the catalog granularity).
    pub price_dollars: i64,

    /// Speaker pairs one unit can drive. Amplifiers only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pairs: Option<u32>,

    /// Displays one unit can address. Matrix switches only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tvs: Option<u32>,

    /// Whether the unit fits a standard AV rack. Display metadata.
    #[serde(default)]
    pub rackmount: bool,

    /// Sales copy shown on the option card.
    #[serde(default)]
    pub description: String,

    /// Why an installer would pick this option. Display text.
    #[serde(default)]
    pub reasoning: String,
}

impl DeviceOption {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_dollars(self.price_dollars)
    }

    /// Returns the per-unit capacity appropriate to this option's category.
    ///
    /// An amplifier reads `max_pairs`, a matrix reads `max_tvs`, and every
    /// other category has no multiplicity concept (`None`). A capacity field
    /// set on the wrong category is ignored rather than trusted.
    ///
    /// ## Example
    /// ```rust
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
    /// assert_eq!(amp.capacity(), Some(16));
    /// ```
    pub fn capacity(&self) -> Option<u32> {
        match self.category.capacity_kind() {
            Some(CapacityKind::SpeakerPairs) => self.max_pairs,
            Some(CapacityKind::Televisions) => self.max_tvs,
            None => None,
        }
    }

    /// "Brand Model" display string for summary lines.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn option(category: Category, max_pairs: Option<u32>, max_tvs: Option<u32>) -> DeviceOption {
        DeviceOption {
            id: "test".to_string(),
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
    fn test_system_categories() {
        assert!(Category::Preamp.is_system());
        assert!(Category::Amplifier.is_system());
        assert!(Category::Matrix.is_system());
        assert!(!Category::LightingStrip.is_system());
        assert!(!Category::Controller.is_system());
    }

    #[test]
    fn test_capacity_kind_by_category() {
        assert_eq!(
            Category::Amplifier.capacity_kind(),
            Some(CapacityKind::SpeakerPairs)
        );
        assert_eq!(
            Category::Matrix.capacity_kind(),
            Some(CapacityKind::Televisions)
        );
        assert_eq!(Category::Preamp.capacity_kind(), None);
        assert_eq!(Category::Mount.capacity_kind(), None);
    }

    #[test]
    fn test_capacity_reads_the_right_field() {
        assert_eq!(option(Category::Amplifier, Some(16), None).capacity(), Some(16));
        assert_eq!(option(Category::Matrix, None, Some(16)).capacity(), Some(16));
        // A preamp ignores capacity fields even if a catalog author sets one
        assert_eq!(option(Category::Preamp, Some(8), Some(8)).capacity(), None);
        // An amplifier does not fall back to max_tvs
        assert_eq!(option(Category::Amplifier, None, Some(16)).capacity(), None);
    }

    #[test]
    fn test_category_serde_kebab_case() {
        let json = serde_json::to_string(&Category::LightingStrip).unwrap();
        assert_eq!(json, r#""lighting-strip""#);

        let back: Category = serde_json::from_str(r#""preamp""#).unwrap();
        assert_eq!(back, Category::Preamp);
    }

    #[test]
    fn test_display_name() {
        let amp = option(Category::Amplifier, Some(16), None);
        assert_eq!(amp.display_name(), "Brand Model");
    }
}
