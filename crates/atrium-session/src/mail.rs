//! # Outbound Summary Mail
//!
//! The final hand-off: a destination address, a subject, and a body
//! produced by the summary formatter, given to the host environment's mail
//! composer.
//!
//! ## Fire and Forget
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Mail Hand-off                                        │
//! │                                                                         │
//! │  Session ──► MailPayload { to, subject, body }                         │
//! │                   │                                                     │
//! │                   ▼                                                     │
//! │  MailDispatch::dispatch(&payload)   (host's default composer)          │
//! │                   │                                                     │
//! │                   ▼                                                     │
//! │  Done. The core does NOT await, confirm, or retry delivery.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;
use tracing::info;
use ts_rs::TS;

// =============================================================================
// Mail Payload
// =============================================================================

/// The outbound summary mail, ready for the host's composer.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MailPayload {
    /// Destination address (fixed, configured once).
    pub to: String,

    /// Subject line.
    pub subject: String,

    /// Plain-text body; the summary's line-oriented rendering.
    pub body: String,
}

impl MailPayload {
    /// Renders the payload as a `mailto:` URL for hosts that open the
    /// platform mail composer directly.
    ///
    /// ## Example
    /// ```rust
    /// use atrium_session::mail::MailPayload;
    ///
    /// let payload = MailPayload {
    ///     to: "tech@example.com".into(),
    ///     subject: "Selection summary".into(),
    ///     body: "System Total: $0".into(),
    /// };
    /// assert_eq!(
    ///     payload.mailto_url(),
    ///     "mailto:tech@example.com?subject=Selection%20summary&body=System%20Total%3A%20%240"
    /// );
    /// ```
    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            percent_encode(&self.subject),
            percent_encode(&self.body)
        )
    }
}

/// Percent-encodes a query component per RFC 3986: unreserved characters
/// pass through, everything else (including spaces and newlines) becomes
/// `%XX` per UTF-8 byte.
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }

    out
}

// =============================================================================
// Dispatch
// =============================================================================

/// Errors surfaced by a dispatch mechanism.
///
/// Dispatch failure means the hand-off itself failed (no composer
/// available); it never means "delivery failed" - delivery is not tracked.
#[derive(Debug, Error)]
pub enum MailError {
    #[error("Mail hand-off failed: {0}")]
    Handoff(String),
}

/// An external dispatch mechanism the session hands the payload to.
///
/// Implementations open the host's mail composer, enqueue the payload, or
/// log it. The session calls `dispatch` once and takes no further action.
pub trait MailDispatch {
    fn dispatch(&self, payload: &MailPayload) -> Result<(), MailError>;
}

/// Dispatch that logs the hand-off. Used by the dev harness and as a
/// stand-in where no host composer exists.
#[derive(Debug, Default)]
pub struct LogDispatch;

impl MailDispatch for LogDispatch {
    fn dispatch(&self, payload: &MailPayload) -> Result<(), MailError> {
        info!(to = %payload.to, subject = %payload.subject, "Summary mail handed off");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_encoding() {
        assert_eq!(percent_encode("plain"), "plain");
        assert_eq!(percent_encode("a b"), "a%20b");
        assert_eq!(percent_encode("line1\nline2"), "line1%0Aline2");
        assert_eq!(percent_encode("$40,946"), "%2440%2C946");
        assert_eq!(percent_encode("it's"), "it%27s");
    }

    #[test]
    fn test_mailto_url_shape() {
        let payload = MailPayload {
            to: "installs@atrium.example".to_string(),
            subject: "Selection summary".to_string(),
            body: "Preamp: none selected\nSystem Total: $0".to_string(),
        };

        let url = payload.mailto_url();
        assert!(url.starts_with("mailto:installs@atrium.example?subject="));
        assert!(url.contains("Selection%20summary"));
        assert!(url.contains("%0A")); // newline survives as %0A
    }

    #[test]
    fn test_log_dispatch_is_fire_and_forget() {
        let payload = MailPayload {
            to: "installs@atrium.example".to_string(),
            subject: "Selection summary".to_string(),
            body: "System Total: $0".to_string(),
        };
        assert!(LogDispatch.dispatch(&payload).is_ok());
    }
}
