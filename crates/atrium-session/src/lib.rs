//! # atrium-session: Session State and Surface for Atrium
//!
//! This crate owns everything that lives and dies with one user session of
//! the selection wizard, and exposes the surface the presentation layer
//! calls.
//!
//! ## Module Organization
//! ```text
//! atrium_session/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── session.rs      ◄─── Session facade + SessionState wrapper
//! ├── selection.rs    ◄─── Per-category selections, requested counts
//! ├── navigation.rs   ◄─── Page sequence with clamped transitions
//! ├── summary.rs      ◄─── Structured summary + plain-text rendering
//! ├── mail.rs         ◄─── Outbound payload + dispatch hand-off
//! ├── config.rs       ◄─── Env-driven configuration
//! └── error.rs        ◄─── SessionError (what the frontend sees)
//! ```
//!
//! ## Concurrency Model
//! The wizard is single-threaded and event-driven: every mutation happens
//! synchronously in response to a discrete user action, no operation
//! blocks or suspends, and derived totals are recomputed on demand
//! ([`Session::summary`]). The [`SessionState`] wrapper exists only
//! because a host's command handlers may dispatch from multiple threads.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use atrium_catalog::builtin;
//! use atrium_core::Category;
//! use atrium_session::{Session, SessionConfig};
//!
//! let catalog = Arc::new(builtin().unwrap());
//! let mut session = Session::new(catalog, SessionConfig::default());
//!
//! session.select_option(Category::Preamp, "marantz7706").unwrap();
//! session.select_option(Category::Amplifier, "monoprice16ch").unwrap();
//!
//! let summary = session.summary().unwrap();
//! // $2,300 preamp + 4 × $1,300 amplifiers for the default 54 pairs
//! assert_eq!(summary.system_total.dollars(), 7500);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod mail;
pub mod navigation;
pub mod selection;
pub mod session;
pub mod summary;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::SessionConfig;
pub use error::{ErrorCode, SessionError, SessionResult};
pub use mail::{LogDispatch, MailDispatch, MailError, MailPayload};
pub use navigation::{NavigationState, PageId};
pub use selection::{SelectionState, Toggle};
pub use session::{Session, SessionState};
pub use summary::{build_summary, ChosenLine, SummaryLine, SystemSummary};
