//! # Summary Formatter
//!
//! Converts the current selection state + sizing outputs into a structured
//! summary and a plain-text rendering suitable as a mail body.
//!
//! ## Summary Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Your Selections                                                        │
//! │                                                                         │
//! │  Preamp/Processor/Receiver   Marantz AV7706              $2,300        │
//! │  Amplifier(s)                Sonos Amp  x 54             $37,746       │
//! │  HDMI Matrix Switch          none selected               $0            │
//! │  LED Strip                   Flexfire RGB+WW Strip       $139 *        │
//! │  ...                                                                    │
//! │                                                                         │
//! │  System Total: $40,046                (* lighting priced separately)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Total Asymmetry
//! The System Total folds only the three system categories (preamp,
//! amplifier, matrix). Lighting selections are priced per line and shown,
//! but never added to the total - the storefront has always presented them
//! this way, and the rendering says so explicitly rather than hiding it.
//!
//! ## Determinism
//! For a fixed selection, catalog, and requested counts, every derived
//! number here is a pure function - safe to recompute on every state
//! change without drift.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;
use ts_rs::TS;

use atrium_catalog::Catalog;
use atrium_core::sizing::size_selection;
use atrium_core::{Category, DeviceOption, Money};

use crate::error::SessionResult;
use crate::selection::SelectionState;

// =============================================================================
// Summary Types
// =============================================================================

/// The chosen option on one summary line, with its sizing outputs.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChosenLine {
    /// Catalog id of the chosen option.
    pub id: String,

    /// "Brand Model" display string.
    pub name: String,

    /// Per-unit price.
    pub unit_price: Money,

    /// Physical units required to cover the requested count.
    pub units: u32,

    /// `unit_price × units`.
    pub subtotal: Money,

    /// Sizing annotation shown under the line, when the category has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One summary line: a category slot and whatever is chosen in it.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SummaryLine {
    /// The category slot.
    pub category: Category,

    /// Human-readable category label.
    pub label: String,

    /// The chosen option, or `None` when the slot is empty (including the
    /// stale-id case, which degrades to an empty slot).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chosen: Option<ChosenLine>,
}

impl SummaryLine {
    /// This line's contribution to the System Total: zero for empty slots
    /// and for non-system (lighting) categories.
    fn system_contribution(&self) -> Money {
        if !self.category.is_system() {
            return Money::zero();
        }
        self.chosen
            .as_ref()
            .map(|c| c.subtotal)
            .unwrap_or_else(Money::zero)
    }
}

/// The full structured summary: one line per category plus the grand total.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SystemSummary {
    /// One line per category, in display order.
    pub lines: Vec<SummaryLine>,

    /// The requested speaker-pair count the sizing ran against.
    pub requested_pairs: u32,

    /// The requested TV count the sizing ran against.
    pub requested_tvs: u32,

    /// Sum of preamp + amplifier + matrix subtotals. Lighting excluded.
    pub system_total: Money,

    /// When this summary was computed.
    #[ts(as = "String")]
    pub generated_at: DateTime<Utc>,
}

// =============================================================================
// Builder
// =============================================================================

/// Builds the structured summary for the current state.
///
/// Pull-based recomputation: call this on demand; it derives everything
/// from the selection, catalog, and requested counts, storing nothing.
///
/// A selected id that no longer exists in the catalog is treated as
/// "nothing selected" (logged, never surfaced as an error).
pub fn build_summary(
    selection: &SelectionState,
    catalog: &Catalog,
) -> SessionResult<SystemSummary> {
    let mut lines = Vec::with_capacity(Category::ALL.len());

    for category in Category::ALL {
        let chosen = match selection.selected_id(category) {
            None => None,
            Some(id) => match catalog.lookup(category, id) {
                Some(option) => {
                    let requested = selection.requested_for(category);
                    let (units, subtotal) = size_selection(option, requested)?;
                    Some(ChosenLine {
                        id: option.id.clone(),
                        name: option.display_name(),
                        unit_price: option.price(),
                        units,
                        subtotal,
                        note: sizing_note(option, units, requested),
                    })
                }
                None => {
                    // Stale id (catalog edited between releases): degrade
                    // to an empty slot.
                    warn!(%category, id, "Selected id missing from catalog; treating as unselected");
                    None
                }
            },
        };

        lines.push(SummaryLine {
            category,
            label: category.label().to_string(),
            chosen,
        });
    }

    let system_total = lines
        .iter()
        .fold(Money::zero(), |acc, line| acc + line.system_contribution());

    Ok(SystemSummary {
        lines,
        requested_pairs: selection.requested_pairs(),
        requested_tvs: selection.requested_tvs(),
        system_total,
        generated_at: Utc::now(),
    })
}

/// The per-line sizing annotation, matching the storefront's feedback copy.
fn sizing_note(option: &DeviceOption, units: u32, requested: u32) -> Option<String> {
    match option.category {
        Category::Amplifier => {
            let mut note = format!(
                "{} of these amplifiers needed to power {} speaker pairs",
                units, requested
            );
            if option.capacity() == Some(1) {
                note.push_str(" (one per zone)");
            }
            Some(note)
        }
        Category::Matrix => Some(if units == 1 {
            format!("One unit supports all {} TVs", requested)
        } else {
            format!("{} units stacked to address {} TVs", units, requested)
        }),
        _ => None,
    }
}

// =============================================================================
// Text Rendering
// =============================================================================

impl SystemSummary {
    /// Flattens the summary into a line-oriented plain-text report, one
    /// fact per line, ending with the `System Total: $<amount>` line.
    ///
    /// This is the outbound mail body.
    pub fn render_text(&self, project_name: &str) -> String {
        let mut out = Vec::new();

        out.push(project_name.to_string());
        out.push(format!("Prepared: {}", self.generated_at.format("%Y-%m-%d")));
        out.push(format!("Requested speaker pairs: {}", self.requested_pairs));
        out.push(format!("Requested TVs: {}", self.requested_tvs));
        out.push(String::new());

        let mut any_lighting = false;
        for line in &self.lines {
            match &line.chosen {
                None => out.push(format!("{}: none selected", line.label)),
                Some(chosen) => {
                    if line.category.capacity_kind().is_some() {
                        out.push(format!(
                            "{}: {}, {} x {} = {}",
                            line.label, chosen.name, chosen.units, chosen.unit_price, chosen.subtotal
                        ));
                    } else {
                        out.push(format!("{}: {} ({})", line.label, chosen.name, chosen.subtotal));
                    }
                    if let Some(note) = &chosen.note {
                        out.push(format!("Note: {}", note));
                    }
                    if !line.category.is_system() {
                        any_lighting = true;
                    }
                }
            }
        }

        out.push(String::new());
        if any_lighting {
            out.push("Lighting items are priced individually and not included in the total.".to_string());
        }
        out.push(format!("System Total: {}", self.system_total));

        out.join("\n")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_catalog() -> Catalog {
        let options = vec![
            DeviceOption {
                id: "marantz7706".to_string(),
                category: Category::Preamp,
                brand: "Marantz".to_string(),
                model: "AV7706".to_string(),
                price_dollars: 3200,
                max_pairs: None,
                max_tvs: None,
                rackmount: true,
                description: String::new(),
                reasoning: String::new(),
            },
            DeviceOption {
                id: "sonosamp".to_string(),
                category: Category::Amplifier,
                brand: "Sonos".to_string(),
                model: "Amp".to_string(),
                price_dollars: 699,
                max_pairs: Some(1),
                max_tvs: None,
                rackmount: false,
                description: String::new(),
                reasoning: String::new(),
            },
            DeviceOption {
                id: "monoprice16ch".to_string(),
                category: Category::Amplifier,
                brand: "Monoprice".to_string(),
                model: "16-Channel Amplifier".to_string(),
                price_dollars: 1300,
                max_pairs: Some(16),
                max_tvs: None,
                rackmount: true,
                description: String::new(),
                reasoning: String::new(),
            },
            DeviceOption {
                id: "wyrestorm16x16".to_string(),
                category: Category::Matrix,
                brand: "Wyrestorm".to_string(),
                model: "MXV-1616-H2A".to_string(),
                price_dollars: 8000,
                max_pairs: None,
                max_tvs: Some(16),
                rackmount: true,
                description: String::new(),
                reasoning: String::new(),
            },
            DeviceOption {
                id: "rgbww".to_string(),
                category: Category::LightingStrip,
                brand: "Flexfire".to_string(),
                model: "RGB+WW Strip".to_string(),
                price_dollars: 139,
                max_pairs: None,
                max_tvs: None,
                rackmount: false,
                description: String::new(),
                reasoning: String::new(),
            },
        ];
        Catalog::from_options(options).unwrap()
    }

    #[test]
    fn test_end_to_end_scenario() {
        // preamp $3,200 + Sonos Amp at 54 pairs, no matrix
        let catalog = fixture_catalog();
        let mut selection = SelectionState::new();
        selection.toggle_select(Category::Preamp, "marantz7706");
        selection.toggle_select(Category::Amplifier, "sonosamp");

        let summary = build_summary(&selection, &catalog).unwrap();

        let amp = summary.lines[1].chosen.as_ref().unwrap();
        assert_eq!(amp.units, 54);
        assert_eq!(amp.subtotal, Money::from_dollars(37746));

        // no matrix selected contributes zero
        assert!(summary.lines[2].chosen.is_none());

        assert_eq!(summary.system_total, Money::from_dollars(40946));
    }

    #[test]
    fn test_lighting_priced_but_excluded_from_total() {
        let catalog = fixture_catalog();
        let mut selection = SelectionState::new();
        selection.toggle_select(Category::Preamp, "marantz7706");
        selection.toggle_select(Category::LightingStrip, "rgbww");

        let summary = build_summary(&selection, &catalog).unwrap();

        let strip = summary
            .lines
            .iter()
            .find(|l| l.category == Category::LightingStrip)
            .and_then(|l| l.chosen.as_ref())
            .unwrap();
        assert_eq!(strip.units, 1);
        assert_eq!(strip.subtotal, Money::from_dollars(139));

        // the strip's $139 is shown on its line but not folded in
        assert_eq!(summary.system_total, Money::from_dollars(3200));
    }

    #[test]
    fn test_stale_id_degrades_to_unselected() {
        let catalog = fixture_catalog();
        let mut selection = SelectionState::new();
        selection.toggle_select(Category::Matrix, "discontinued-model");

        let summary = build_summary(&selection, &catalog).unwrap();

        assert!(summary.lines[2].chosen.is_none());
        assert_eq!(summary.system_total, Money::zero());
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let catalog = fixture_catalog();
        let mut selection = SelectionState::new();
        selection.toggle_select(Category::Amplifier, "monoprice16ch");
        selection.set_requested_pairs(54).unwrap();

        let first = build_summary(&selection, &catalog).unwrap();
        let second = build_summary(&selection, &catalog).unwrap();

        // re-running on unchanged state accumulates no drift
        assert_eq!(first.system_total, second.system_total);
        assert_eq!(
            first.lines[1].chosen.as_ref().unwrap().units,
            second.lines[1].chosen.as_ref().unwrap().units
        );
        assert_eq!(first.system_total, Money::from_dollars(5200));
    }

    #[test]
    fn test_matrix_units_fold_into_total() {
        let catalog = fixture_catalog();
        let mut selection = SelectionState::new();
        selection.toggle_select(Category::Matrix, "wyrestorm16x16");
        selection.set_requested_tvs(20).unwrap();

        let summary = build_summary(&selection, &catalog).unwrap();

        let matrix = summary.lines[2].chosen.as_ref().unwrap();
        assert_eq!(matrix.units, 2);
        assert_eq!(summary.system_total, Money::from_dollars(16000));
    }

    #[test]
    fn test_render_text_ends_with_total_line() {
        let catalog = fixture_catalog();
        let mut selection = SelectionState::new();
        selection.toggle_select(Category::Preamp, "marantz7706");
        selection.toggle_select(Category::Amplifier, "sonosamp");

        let summary = build_summary(&selection, &catalog).unwrap();
        let text = summary.render_text("Clayton Estate Smart Home Selection");

        assert!(text.starts_with("Clayton Estate Smart Home Selection"));
        assert!(text.contains("Amplifier(s): Sonos Amp, 54 x $699 = $37,746"));
        assert!(text.contains("HDMI Matrix Switch: none selected"));
        assert!(text.ends_with("System Total: $40,946"));
    }

    #[test]
    fn test_render_text_notes_lighting_asymmetry() {
        let catalog = fixture_catalog();
        let mut selection = SelectionState::new();
        selection.toggle_select(Category::LightingStrip, "rgbww");

        let summary = build_summary(&selection, &catalog).unwrap();
        let text = summary.render_text("Test Project");

        assert!(text.contains("LED Strip: Flexfire RGB+WW Strip ($139)"));
        assert!(text.contains("priced individually and not included"));
        assert!(text.ends_with("System Total: $0"));
    }

    #[test]
    fn test_sonos_note_mentions_one_per_zone() {
        let catalog = fixture_catalog();
        let mut selection = SelectionState::new();
        selection.toggle_select(Category::Amplifier, "sonosamp");

        let summary = build_summary(&selection, &catalog).unwrap();
        let note = summary.lines[1]
            .chosen
            .as_ref()
            .unwrap()
            .note
            .as_deref()
            .unwrap();
        assert!(note.contains("54 of these amplifiers"));
        assert!(note.contains("one per zone"));
    }
}
