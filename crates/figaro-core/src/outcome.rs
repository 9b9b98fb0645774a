//! Turn outcomes.
//!
//! Every turn resolves to exactly one [`TurnOutcome`], failure paths
//! included. The enum serializes with a `type` tag so transports can return
//! it to callers directly.

use serde::{Deserialize, Serialize};

use crate::capability::CapabilityOutput;
use crate::selection::MalformedSelection;

/// Failure class for a reasoning-service call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayFailureKind {
    /// Transport-level failure or a service-side error reply.
    Unavailable,
    /// The bounded wait elapsed before a reply arrived.
    Timeout,
    /// The reply could not be interpreted as a choice or as text.
    MalformedResponse,
}

/// Final result of one orchestrated turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnOutcome {
    /// A capability was selected, invoked once, and succeeded.
    Dispatched {
        /// Capability that ran.
        capability: String,
        /// The capability's result.
        result: CapabilityOutput,
    },
    /// The service answered in prose; no capability was invoked.
    NoOpText {
        /// The prose reply.
        text: String,
    },
    /// The service's choice failed validation; no capability was invoked.
    RejectedSelection {
        /// Why the choice was rejected.
        #[serde(flatten)]
        reason: MalformedSelection,
    },
    /// The selected capability was invoked once and failed.
    CapabilityFailure {
        /// Capability that failed.
        capability: String,
        /// Error description.
        error: String,
    },
    /// The reasoning service could not produce a usable reply.
    GatewayFailure {
        /// Failure class.
        kind: GatewayFailureKind,
        /// Human-readable message.
        message: String,
    },
}

impl TurnOutcome {
    /// Short label for logging.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dispatched { .. } => "dispatched",
            Self::NoOpText { .. } => "no_op_text",
            Self::RejectedSelection { .. } => "rejected_selection",
            Self::CapabilityFailure { .. } => "capability_failure",
            Self::GatewayFailure { .. } => "gateway_failure",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
