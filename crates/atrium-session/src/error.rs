//! # Session Error Type
//!
//! Unified error type for the session surface.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Atrium                                 │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  session.setRequestedPairs(0)                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Surface Method                                                  │  │
//! │  │  Result<T, SessionError>                                         │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation Error? ── ValidationError::MustBePositive ──┐       │  │
//! │  │         │                                               ▼       │  │
//! │  │  Catalog Error? ───── CatalogError::ZeroCapacity ── SessionError │  │
//! │  │         │                                               │       │  │
//! │  │  Success ───────────────────────────────────────────────┼──────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  catch (e) { // e.message = "requested speaker pairs must be positive" │
//! │              // e.code = "VALIDATION_ERROR" }                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error here is local and recoverable: the worst outcome is
//! "calculation rejected, prior total retained".

use serde::Serialize;
use ts_rs::TS;

use atrium_catalog::CatalogError;
use atrium_core::{CoreError, ValidationError};

/// Error returned from the session surface.
///
/// ## Serialization
/// This is what the frontend receives when a call fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "requested speaker pairs must be positive"
/// }
/// ```
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SessionError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for session responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Referenced resource does not exist
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Catalog-integrity failure (authoring error)
    CatalogError,

    /// Business logic refused the operation
    BusinessLogic,

    /// Unexpected internal failure
    Internal,
}

impl SessionError {
    /// Creates a new session error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        SessionError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        SessionError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        SessionError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        SessionError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to session errors.
impl From<CoreError> for SessionError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ZeroCapacity { .. } => {
                // Log the authoring error; the user sees a generic message
                tracing::error!("Catalog integrity violation reached the calculator: {err}");
                SessionError::new(ErrorCode::CatalogError, err.to_string())
            }
            CoreError::Validation(e) => SessionError::validation(e.to_string()),
        }
    }
}

/// Converts validation errors to session errors.
impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::validation(err.to_string())
    }
}

/// Converts catalog load errors to session errors.
impl From<CatalogError> for SessionError {
    fn from(err: CatalogError) -> Self {
        SessionError::new(ErrorCode::CatalogError, err.to_string())
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for SessionError {}

/// Convenience type alias for Results with SessionError.
pub type SessionResult<T> = Result<T, SessionError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_code() {
        let core_err: CoreError = ValidationError::MustBePositive {
            field: "requested TVs".to_string(),
        }
        .into();
        let session_err: SessionError = core_err.into();
        assert_eq!(session_err.code, ErrorCode::ValidationError);
        assert!(session_err.message.contains("requested TVs"));
    }

    #[test]
    fn test_zero_capacity_maps_to_catalog_code() {
        let session_err: SessionError = CoreError::ZeroCapacity {
            id: "broken".to_string(),
        }
        .into();
        assert_eq!(session_err.code, ErrorCode::CatalogError);
    }

    #[test]
    fn test_serialization_shape() {
        let err = SessionError::validation("requested speaker pairs must be positive");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "requested speaker pairs must be positive");
    }
}
