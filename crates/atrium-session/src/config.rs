//! # Session Configuration
//!
//! Stores configuration loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ATRIUM_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

/// Session configuration.
///
/// One instance per process; every session created by the host shares it.
/// The mail destination is "configured once" here - the session never
/// prompts for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Project name shown as the summary heading.
    pub project_name: String,

    /// Destination address for the outbound summary mail.
    pub advisor_email: String,

    /// Prefix for the outbound mail subject line.
    pub subject_prefix: String,
}

impl Default for SessionConfig {
    /// Returns default configuration suitable for development.
    fn default() -> Self {
        SessionConfig {
            project_name: "Clayton Estate Smart Home Selection".to_string(),
            advisor_email: "installs@atrium.example".to_string(),
            subject_prefix: "Selection summary".to_string(),
        }
    }
}

impl SessionConfig {
    /// Creates a new SessionConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `ATRIUM_PROJECT_NAME`: Override the project name
    /// - `ATRIUM_ADVISOR_EMAIL`: Override the mail destination
    /// - `ATRIUM_SUBJECT_PREFIX`: Override the mail subject prefix
    pub fn from_env() -> Self {
        let mut config = SessionConfig::default();

        if let Ok(project_name) = std::env::var("ATRIUM_PROJECT_NAME") {
            config.project_name = project_name;
        }

        if let Ok(advisor_email) = std::env::var("ATRIUM_ADVISOR_EMAIL") {
            config.advisor_email = advisor_email;
        }

        if let Ok(subject_prefix) = std::env::var("ATRIUM_SUBJECT_PREFIX") {
            config.subject_prefix = subject_prefix;
        }

        config
    }

    /// Subject line for the outbound summary mail.
    ///
    /// ## Example
    /// ```rust
    /// use atrium_session::config::SessionConfig;
    ///
    /// let config = SessionConfig::default();
    /// assert_eq!(
    ///     config.mail_subject(),
    ///     "Selection summary: Clayton Estate Smart Home Selection"
    /// );
    /// ```
    pub fn mail_subject(&self) -> String {
        format!("{}: {}", self.subject_prefix, self.project_name)
    }
}
