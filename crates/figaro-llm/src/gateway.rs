//! # Reasoning gateway trait
//!
//! Core abstraction over the remote reasoning service. The orchestrator
//! hands the service one prompt plus the declared capability surface; the
//! reply is either prose or one or more structured capability choices.
//!
//! The gateway never retries. Every failure is classified so the turn can
//! resolve to a well-formed outcome, and the single `converse` call is
//! cancellable: dropping the future abandons the round trip.

use async_trait::async_trait;

use figaro_core::capability::CapabilitySpec;
use figaro_core::outcome::GatewayFailureKind;
use figaro_core::prompt::PromptContext;
use figaro_core::selection::CapabilityChoice;

/// Result type alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors that can occur during one gateway round trip.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The transport failed before a reply arrived.
    #[error("gateway unreachable: {0}")]
    Unavailable(#[from] reqwest::Error),

    /// The bounded wait elapsed before a reply arrived.
    #[error("gateway timed out after {timeout_ms}ms")]
    Timeout {
        /// The configured bound in milliseconds.
        timeout_ms: u64,
    },

    /// The service returned a non-success status.
    #[error("gateway API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error description from the service.
        message: String,
    },

    /// The reply parsed as neither a capability choice nor text.
    #[error("malformed gateway response: {message}")]
    MalformedResponse {
        /// What was wrong with the reply.
        message: String,
    },
}

impl GatewayError {
    /// Failure class reported in the turn outcome.
    ///
    /// An API error reply means the service produced no usable selection,
    /// so it is reported as unavailable; the status survives in the message.
    #[must_use]
    pub fn kind(&self) -> GatewayFailureKind {
        match self {
            Self::Unavailable(_) | Self::Api { .. } => GatewayFailureKind::Unavailable,
            Self::Timeout { .. } => GatewayFailureKind::Timeout,
            Self::MalformedResponse { .. } => GatewayFailureKind::MalformedResponse,
        }
    }
}

/// One reply from the reasoning service.
///
/// Every structured choice is preserved in service order; the interpreter
/// applies the use-first policy downstream, so the policy lives in exactly
/// one place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GatewayReply {
    /// Structured capability choices, in service order.
    pub choices: Vec<CapabilityChoice>,
    /// Concatenated prose parts, if any.
    pub text: Option<String>,
}

/// Remote reasoning service.
///
/// Implementors must be `Send + Sync` so one gateway can serve concurrent
/// turns behind an `Arc`.
#[async_trait]
pub trait ReasoningGateway: Send + Sync {
    /// Service identifier for logs (e.g. `"google"`).
    fn name(&self) -> &'static str;

    /// Ask the service to select a capability, or answer in prose, for one
    /// prompt given the declared capability surface.
    async fn converse(
        &self,
        prompt: &PromptContext,
        capabilities: &[CapabilitySpec],
    ) -> GatewayResult<GatewayReply>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_maps_to_timeout_kind() {
        let err = GatewayError::Timeout { timeout_ms: 8000 };
        assert_eq!(err.kind(), GatewayFailureKind::Timeout);
        assert_eq!(err.to_string(), "gateway timed out after 8000ms");
    }

    #[test]
    fn api_error_maps_to_unavailable_kind() {
        let err = GatewayError::Api {
            status: 503,
            message: "overloaded".into(),
        };
        assert_eq!(err.kind(), GatewayFailureKind::Unavailable);
        assert_eq!(err.to_string(), "gateway API error (503): overloaded");
    }

    #[test]
    fn malformed_maps_to_malformed_kind() {
        let err = GatewayError::MalformedResponse {
            message: "no candidates".into(),
        };
        assert_eq!(err.kind(), GatewayFailureKind::MalformedResponse);
    }

    #[test]
    fn gateway_is_object_safe() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ReasoningGateway>();
    }

    #[test]
    fn empty_reply_default() {
        let reply = GatewayReply::default();
        assert!(reply.choices.is_empty());
        assert!(reply.text.is_none());
    }
}
