//! # Navigation Controller
//!
//! A finite ordered sequence of wizard pages with clamped transitions.
//!
//! ## Page Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Wizard Pages                                      │
//! │                                                                         │
//! │  av ─► lighting ─► networking ─► racks ─► security ─► cameras ─►       │
//! │                                        touchscreens ─► summary          │
//! │                                                                         │
//! │  next():   step right, no-op on the last page                          │
//! │  back():   step left, no-op on the first page                          │
//! │  jump_to(): unconstrained (the nav bar) - no completion gating;        │
//! │            summary is reachable at any time and leavable like any      │
//! │            other page (it is not a terminal state)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use ts_rs::TS;

// =============================================================================
// Page Id
// =============================================================================

/// A wizard page identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    Av,
    Lighting,
    Networking,
    Racks,
    Security,
    Cameras,
    Touchscreens,
    Summary,
}

impl PageId {
    /// All pages in wizard order. `next`/`back` walk this sequence.
    pub const ALL: [PageId; 8] = [
        PageId::Av,
        PageId::Lighting,
        PageId::Networking,
        PageId::Racks,
        PageId::Security,
        PageId::Cameras,
        PageId::Touchscreens,
        PageId::Summary,
    ];

    /// Tab label, as shown in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            PageId::Av => "A/V System Builder",
            PageId::Lighting => "LED Lighting",
            PageId::Networking => "Networking",
            PageId::Racks => "Equipment Racks",
            PageId::Security => "Security Sensors",
            PageId::Cameras => "POE Cameras",
            PageId::Touchscreens => "In-Wall Touchscreens",
            PageId::Summary => "Summary",
        }
    }

    /// Position of this page in wizard order.
    fn position(&self) -> usize {
        // ALL contains every variant, so the lookup cannot fail
        PageId::ALL.iter().position(|p| p == self).unwrap_or(0)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Current position in the wizard.
///
/// ## Invariant
/// `current` never leaves `0..PageId::ALL.len()`; the three transition
/// methods are the only mutators. Serialize-only: sessions are never
/// restored from outside, so no deserialization path can break the bound.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    current: usize,
}

impl NavigationState {
    /// Starts on the first page (`av`).
    pub fn new() -> Self {
        NavigationState { current: 0 }
    }

    /// The page currently shown.
    pub fn current_page(&self) -> PageId {
        PageId::ALL[self.current]
    }

    /// Steps to the next page. No-op on the last page.
    ///
    /// Returns whether the page changed.
    pub fn next(&mut self) -> bool {
        if self.current + 1 < PageId::ALL.len() {
            self.current += 1;
            debug!(page = %self.current_page(), "Navigated forward");
            true
        } else {
            false
        }
    }

    /// Steps to the previous page. No-op on the first page.
    ///
    /// Returns whether the page changed.
    pub fn back(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            debug!(page = %self.current_page(), "Navigated back");
            true
        } else {
            false
        }
    }

    /// Jumps directly to `page` (the navigation bar).
    ///
    /// Unconstrained: no gating on earlier selections being made.
    pub fn jump_to(&mut self, page: PageId) {
        self.current = page.position();
        debug!(page = %page, "Jumped to page");
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
