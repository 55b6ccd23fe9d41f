//! # Selection State
//!
//! Manages the current per-category selections and the two user-adjustable
//! scalar inputs.
//!
//! ## Selection Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Selection State Operations                           │
//! │                                                                         │
//! │  Frontend Action          Surface Call            State Change          │
//! │  ───────────────          ────────────            ────────────          │
//! │                                                                         │
//! │  Click option card ──────► toggle_select() ─────► select / clear       │
//! │                                                                         │
//! │  Click selected card ────► toggle_select() ─────► clear (deselect)     │
//! │                                                                         │
//! │  Change pair count ──────► set_requested_pairs ─► pairs = n            │
//! │                                                                         │
//! │  Change TV count ────────► set_requested_tvs ───► tvs = n              │
//! │                                                                         │
//! │  Every mutation bumps `revision`: the state-changed signal driving     │
//! │  reactive recomputation of derived totals.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Exactly one id may be selected per category at a time (exclusive
//!   choice); selecting a different id replaces the previous one
//! - Requested counts are always positive (non-positive input is rejected
//!   before it reaches the calculator)
//! - A stored id is NOT guaranteed to exist in the catalog: a stale id
//!   degrades to "nothing selected" at summary time

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use atrium_core::validation::{
    pairs_in_clamp_range, tvs_in_clamp_range, validate_requested_pairs, validate_requested_tvs,
};
use atrium_core::{
    CapacityKind, Category, ValidationError, DEFAULT_SPEAKER_PAIRS, DEFAULT_TV_COUNT,
    MAX_SPEAKER_PAIRS, MAX_TV_COUNT,
};

/// Outcome of a toggle-select call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Toggle {
    /// The id is now the category's selection.
    Selected,
    /// The id was already selected; the category is now empty.
    Cleared,
}

/// Session-scoped selection state.
///
/// Created at session start with all selections empty and default counts;
/// mutated only by [`toggle_select`](SelectionState::toggle_select) and the
/// two scalar setters; discarded when the session ends (no persistence, so
/// no deserialization path).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    /// Chosen option id per category. Absent key = nothing selected.
    selected: HashMap<Category, String>,

    /// Requested speaker-pair count (amplifier sizing input).
    requested_pairs: u32,

    /// Requested TV count (matrix sizing input).
    requested_tvs: u32,

    /// Monotonic change counter, bumped on every mutation.
    revision: u64,
}

impl SelectionState {
    /// Creates the initial state: nothing selected, default counts.
    pub fn new() -> Self {
        SelectionState {
            selected: HashMap::new(),
            requested_pairs: DEFAULT_SPEAKER_PAIRS,
            requested_tvs: DEFAULT_TV_COUNT,
            revision: 0,
        }
    }

    /// Selects `id` in `category`, or clears the category when `id` is
    /// already its selection (toggle-to-deselect).
    ///
    /// Exclusive choice: selecting a different id replaces the previous
    /// selection for the category. No other category is touched.
    pub fn toggle_select(&mut self, category: Category, id: &str) -> Toggle {
        self.revision += 1;

        if self.selected.get(&category).map(String::as_str) == Some(id) {
            self.selected.remove(&category);
            debug!(%category, id, revision = self.revision, "Selection cleared");
            Toggle::Cleared
        } else {
            self.selected.insert(category, id.to_string());
            debug!(%category, id, revision = self.revision, "Option selected");
            Toggle::Selected
        }
    }

    /// The currently selected id for a category, if any.
    pub fn selected_id(&self, category: Category) -> Option<&str> {
        self.selected.get(&category).map(String::as_str)
    }

    /// Sets the requested speaker-pair count.
    ///
    /// Non-positive counts are rejected; the prior value is retained.
    /// Counts beyond the UI clamp range (`1..=128`) are accepted but
    /// logged - clamping is the presentation layer's job.
    pub fn set_requested_pairs(&mut self, pairs: u32) -> Result<(), ValidationError> {
        validate_requested_pairs(pairs)?;

        if !pairs_in_clamp_range(pairs) {
            warn!(
                pairs,
                max = MAX_SPEAKER_PAIRS,
                "Requested pair count exceeds the UI clamp range"
            );
        }

        self.requested_pairs = pairs;
        self.revision += 1;
        Ok(())
    }

    /// Sets the requested TV count. Same contract as
    /// [`set_requested_pairs`](SelectionState::set_requested_pairs).
    pub fn set_requested_tvs(&mut self, tvs: u32) -> Result<(), ValidationError> {
        validate_requested_tvs(tvs)?;

        if !tvs_in_clamp_range(tvs) {
            warn!(
                tvs,
                max = MAX_TV_COUNT,
                "Requested TV count exceeds the UI clamp range"
            );
        }

        self.requested_tvs = tvs;
        self.revision += 1;
        Ok(())
    }

    /// Requested speaker-pair count.
    #[inline]
    pub fn requested_pairs(&self) -> u32 {
        self.requested_pairs
    }

    /// Requested TV count.
    #[inline]
    pub fn requested_tvs(&self) -> u32 {
        self.requested_tvs
    }

    /// The requested count that sizes a selection in `category`.
    ///
    /// Amplifiers size against pairs, matrix switches against TVs; every
    /// other category is a single unit, where the count is irrelevant but
    /// must be positive for the calculator - so 1.
    pub fn requested_for(&self, category: Category) -> u32 {
        match category.capacity_kind() {
            Some(CapacityKind::SpeakerPairs) => self.requested_pairs,
            Some(CapacityKind::Televisions) => self.requested_tvs,
            None => 1,
        }
    }

    /// Monotonic change counter. Two equal revisions mean "nothing changed
    /// in between"; a host can diff this instead of deep-comparing state.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
