//! Capability error types.
//!
//! Unified error enum for all capability execution failures. The dispatcher
//! surfaces these opaquely as a `capability_failure` outcome, so each variant
//! maps to a specific user-facing message format.

use thiserror::Error;

/// Errors that can occur during capability execution.
#[derive(Debug, Error)]
pub enum CapabilityError {
    /// Argument validation failed.
    #[error("validation error: {message}")]
    Validation {
        /// Description of the validation failure.
        message: String,
    },

    /// The capability's backend service is not configured.
    #[error("{feature} is not configured on this server")]
    Unavailable {
        /// Human-readable name of the missing feature.
        feature: String,
    },

    /// A backend service answered with an error status.
    #[error("backend error (HTTP {status}): {message}")]
    Backend {
        /// HTTP status code from the backend.
        status: u16,
        /// Response body or diagnostic message.
        message: String,
    },

    /// HTTP request error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Execution was cancelled.
    #[error("cancelled")]
    Cancelled,

    /// Internal error (catch-all).
    #[error("{message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display() {
        let err = CapabilityError::Validation {
            message: "missing required argument".into(),
        };
        assert_eq!(err.to_string(), "validation error: missing required argument");
    }

    #[test]
    fn unavailable_display_names_feature() {
        let err = CapabilityError::Unavailable {
            feature: "Alumni search".into(),
        };
        assert_eq!(
            err.to_string(),
            "Alumni search is not configured on this server"
        );
    }

    #[test]
    fn backend_display_includes_status() {
        let err = CapabilityError::Backend {
            status: 503,
            message: "upstream down".into(),
        };
        assert_eq!(err.to_string(), "backend error (HTTP 503): upstream down");
    }

    #[test]
    fn cancelled_display() {
        assert_eq!(CapabilityError::Cancelled.to_string(), "cancelled");
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = CapabilityError::from(json_err);
        assert!(matches!(err, CapabilityError::Json(_)));
    }
}
