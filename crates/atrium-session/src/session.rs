//! # Session Facade
//!
//! The top-level object holding one user's wizard state for the duration
//! of a browser tab.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Created │────►│ Selecting│────►│ Summary  │────►│ Mail     │       │
//! │  │ (entry)  │     │          │     │  page    │     │ hand-off │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   select_option     summary()                          │
//! │                   set counts        compose_mail()                     │
//! │                   go_next/back           │                              │
//! │                        ▲                 │  (summary is leavable:      │
//! │                        └─────────────────┘   the user may go back)     │
//! │                                                                         │
//! │  Discarded on exit. No persistence, no hidden module-level singleton:  │
//! │  the host owns exactly one Session per user session.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Surface
//! These are the calls the presentation layer makes, mirrored 1:1 from the
//! wizard's discrete user actions: `select_option`, `set_requested_pairs`,
//! `set_requested_tvs`, `go_next`, `go_back`, `jump_to`, `summary`,
//! `compose_mail` / `send_summary`.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use atrium_catalog::Catalog;
use atrium_core::validation::validate_option_id;
use atrium_core::Category;

use crate::config::SessionConfig;
use crate::error::SessionResult;
use crate::mail::{MailDispatch, MailPayload};
use crate::navigation::{NavigationState, PageId};
use crate::selection::{SelectionState, Toggle};
use crate::summary::{build_summary, SystemSummary};

// =============================================================================
// Session
// =============================================================================

/// One user's wizard session: catalog handle, selection state, navigation
/// state, and configuration.
#[derive(Debug)]
pub struct Session {
    /// Session id for log correlation.
    id: Uuid,

    /// When the session was created.
    created_at: DateTime<Utc>,

    /// Shared read-only catalog.
    catalog: Arc<Catalog>,

    /// Process-wide configuration (mail destination, project name).
    config: SessionConfig,

    /// Per-category selections and requested counts.
    selection: SelectionState,

    /// Current wizard page.
    nav: NavigationState,
}

impl Session {
    /// Creates a fresh session: nothing selected, default counts, first
    /// page.
    pub fn new(catalog: Arc<Catalog>, config: SessionConfig) -> Self {
        let id = Uuid::new_v4();
        info!(session = %id, options = catalog.len(), "Session created");

        Session {
            id,
            created_at: Utc::now(),
            catalog,
            config,
            selection: SelectionState::new(),
            nav: NavigationState::new(),
        }
    }

    /// Session id.
    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// When the session was created.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The catalog this session selects from.
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read access to the selection state.
    #[inline]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    // -------------------------------------------------------------------------
    // Selection surface
    // -------------------------------------------------------------------------

    /// Toggle-selects `id` in `category`.
    ///
    /// The id's format is validated; its existence in the catalog is NOT
    /// required (a stale id is stored and degrades to "nothing selected"
    /// at summary time). Unknown ids are logged.
    pub fn select_option(&mut self, category: Category, id: &str) -> SessionResult<Toggle> {
        validate_option_id(id)?;

        if self.catalog.lookup(category, id).is_none() {
            debug!(session = %self.id, %category, id, "Selecting id not present in catalog");
        }

        Ok(self.selection.toggle_select(category, id))
    }

    /// Sets the requested speaker-pair count (amplifier sizing input).
    pub fn set_requested_pairs(&mut self, pairs: u32) -> SessionResult<()> {
        self.selection.set_requested_pairs(pairs)?;
        Ok(())
    }

    /// Sets the requested TV count (matrix sizing input).
    pub fn set_requested_tvs(&mut self, tvs: u32) -> SessionResult<()> {
        self.selection.set_requested_tvs(tvs)?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Navigation surface
    // -------------------------------------------------------------------------

    /// Steps to the next page (no-op on the last). Returns the current page.
    pub fn go_next(&mut self) -> PageId {
        self.nav.next();
        self.nav.current_page()
    }

    /// Steps to the previous page (no-op on the first). Returns the
    /// current page.
    pub fn go_back(&mut self) -> PageId {
        self.nav.back();
        self.nav.current_page()
    }

    /// Jumps directly to `page` (the navigation bar; unconstrained).
    pub fn jump_to(&mut self, page: PageId) -> PageId {
        self.nav.jump_to(page);
        self.nav.current_page()
    }

    /// The page currently shown.
    pub fn current_page(&self) -> PageId {
        self.nav.current_page()
    }

    // -------------------------------------------------------------------------
    // Summary & mail surface
    // -------------------------------------------------------------------------

    /// Recomputes the structured summary from current state.
    ///
    /// Pure and idempotent: safe to call on every state change.
    pub fn summary(&self) -> SessionResult<SystemSummary> {
        build_summary(&self.selection, &self.catalog)
    }

    /// Builds the outbound mail payload: configured destination, subject,
    /// and the summary's plain-text rendering as the body.
    pub fn compose_mail(&self) -> SessionResult<MailPayload> {
        let summary = self.summary()?;

        Ok(MailPayload {
            to: self.config.advisor_email.clone(),
            subject: self.config.mail_subject(),
            body: summary.render_text(&self.config.project_name),
        })
    }

    /// Composes the summary mail and hands it to `dispatch`.
    ///
    /// Fire-and-forget: a successful hand-off says nothing about
    /// delivery, and no retry is attempted here. The composed payload is
    /// returned so the host can surface it (e.g. show the draft).
    pub fn send_summary(&self, dispatch: &dyn MailDispatch) -> SessionResult<MailPayload> {
        let payload = self.compose_mail()?;

        dispatch
            .dispatch(&payload)
            .map_err(|e| crate::error::SessionError::internal(e.to_string()))?;

        info!(session = %self.id, to = %payload.to, "Summary dispatched");
        Ok(payload)
    }
}

// =============================================================================
// Shared Session State
// =============================================================================

/// Host-managed session state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Session>>` because a host's command handlers may run
/// concurrently even though the wizard itself is single-threaded:
/// - `Arc`: shared ownership across handlers
/// - `Mutex`: one mutation at a time
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Wraps a fresh session.
    pub fn new(session: Session) -> Self {
        SessionState {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let summary = state.with_session(|s| s.summary())?;
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_session_mut(|s| s.select_option(category, id))?;
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        f(&mut session)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_core::{DeviceOption, Money};
    use crate::mail::{LogDispatch, MailError};

    fn fixture_catalog() -> Arc<Catalog> {
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
                id: "atlona16x16".to_string(),
                category: Category::Matrix,
                brand: "Atlona".to_string(),
                model: "AT-UHD-PRO3-16M".to_string(),
                price_dollars: 4000,
                max_pairs: None,
                max_tvs: Some(16),
                rackmount: true,
                description: String::new(),
                reasoning: String::new(),
            },
        ];
        Arc::new(Catalog::from_options(options).unwrap())
    }

    fn test_session() -> Session {
        Session::new(fixture_catalog(), SessionConfig::default())
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut session = test_session();

        session.select_option(Category::Preamp, "marantz7706").unwrap();
        session.select_option(Category::Amplifier, "sonosamp").unwrap();
        session.set_requested_pairs(54).unwrap();

        let summary = session.summary().unwrap();
        // 3,200 + 699 × 54 + 0 = 40,946
        assert_eq!(summary.system_total, Money::from_dollars(40946));
    }

    #[test]
    fn test_toggle_through_the_surface() {
        let mut session = test_session();

        assert_eq!(
            session.select_option(Category::Preamp, "marantz7706").unwrap(),
            Toggle::Selected
        );
        assert_eq!(
            session.select_option(Category::Preamp, "marantz7706").unwrap(),
            Toggle::Cleared
        );
        assert!(session.selection().selected_id(Category::Preamp).is_none());
    }

    #[test]
    fn test_malformed_id_is_rejected() {
        let mut session = test_session();
        assert!(session.select_option(Category::Preamp, "").is_err());
        assert!(session.select_option(Category::Preamp, "has space").is_err());
    }

    #[test]
    fn test_stale_id_is_stored_and_degrades() {
        let mut session = test_session();

        // unknown but well-formed id: stored, not an error
        session
            .select_option(Category::Matrix, "discontinued")
            .unwrap();

        let summary = session.summary().unwrap();
        assert!(summary.lines[2].chosen.is_none());
        assert_eq!(summary.system_total, Money::zero());
    }

    #[test]
    fn test_navigation_surface() {
        let mut session = test_session();
        assert_eq!(session.current_page(), PageId::Av);

        assert_eq!(session.go_next(), PageId::Lighting);
        assert_eq!(session.go_back(), PageId::Av);
        // clamped at the first page
        assert_eq!(session.go_back(), PageId::Av);

        assert_eq!(session.jump_to(PageId::Summary), PageId::Summary);
        // clamped at the last page
        assert_eq!(session.go_next(), PageId::Summary);
    }

    #[test]
    fn test_invalid_count_keeps_prior_total() {
        let mut session = test_session();
        session.select_option(Category::Amplifier, "sonosamp").unwrap();
        session.set_requested_pairs(10).unwrap();

        let before = session.summary().unwrap().system_total;

        // rejected input; nothing changed
        assert!(session.set_requested_pairs(0).is_err());
        let after = session.summary().unwrap().system_total;
        assert_eq!(before, after);
        assert_eq!(after, Money::from_dollars(6990));
    }

    #[test]
    fn test_compose_mail() {
        let mut session = test_session();
        session.select_option(Category::Preamp, "marantz7706").unwrap();
        session.select_option(Category::Amplifier, "sonosamp").unwrap();

        let payload = session.compose_mail().unwrap();
        assert_eq!(payload.to, "installs@atrium.example");
        assert!(payload.subject.starts_with("Selection summary"));
        assert!(payload.body.ends_with("System Total: $40,946"));
    }

    #[test]
    fn test_send_summary_hands_off() {
        let mut session = test_session();
        session.select_option(Category::Preamp, "marantz7706").unwrap();

        let payload = session.send_summary(&LogDispatch).unwrap();
        assert!(payload.body.ends_with("System Total: $3,200"));
    }

    #[test]
    fn test_send_summary_surfaces_handoff_failure() {
        struct BrokenDispatch;
        impl MailDispatch for BrokenDispatch {
            fn dispatch(&self, _payload: &MailPayload) -> Result<(), MailError> {
                Err(MailError::Handoff("no composer registered".to_string()))
            }
        }

        let session = test_session();
        let err = session.send_summary(&BrokenDispatch).unwrap_err();
        assert!(err.message.contains("no composer registered"));
    }

    #[test]
    fn test_session_state_wrapper() {
        let state = SessionState::new(test_session());

        state
            .with_session_mut(|s| s.select_option(Category::Amplifier, "sonosamp"))
            .unwrap();

        let total = state.with_session(|s| s.summary().unwrap().system_total);
        assert_eq!(total, Money::from_dollars(37746));
    }
}
