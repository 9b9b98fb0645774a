//! Interpreted reasoning-service selections.
//!
//! The reasoning service replies with either prose or one or more structured
//! capability choices. Interpretation classifies the reply into a
//! [`Selection`]; a structured choice that fails validation becomes a
//! [`MalformedSelection`] and is never dispatched.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One structured capability choice exactly as the reasoning service
/// returned it, before any validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapabilityChoice {
    /// Capability name the service picked.
    pub name: String,
    /// Arguments the service filled in.
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl CapabilityChoice {
    /// Create a choice with no arguments.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Map::new(),
        }
    }
}

/// Why a structured choice was rejected before dispatch.
///
/// The service's reply is untrusted input; these are the two ways a
/// syntactically valid choice can still be unusable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum MalformedSelection {
    /// The service named a capability that is not registered.
    UnknownCapability {
        /// Name exactly as the service supplied it.
        capability: String,
    },
    /// A required parameter was absent from the supplied arguments.
    MissingArgument {
        /// Capability whose schema was violated.
        capability: String,
        /// First missing required parameter in schema order.
        parameter: String,
    },
}

impl fmt::Display for MalformedSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCapability { capability } => {
                write!(f, "unknown capability '{capability}'")
            }
            Self::MissingArgument {
                capability,
                parameter,
            } => {
                write!(
                    f,
                    "capability '{capability}' is missing required argument '{parameter}'"
                )
            }
        }
    }
}

/// Outcome of interpreting one reasoning-service reply.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    /// No structured choice; the service answered in prose.
    Text(String),
    /// A well-formed choice of a registered capability.
    Capability {
        /// Registered capability name.
        name: String,
        /// Arguments exactly as supplied, extras included.
        arguments: Map<String, Value>,
    },
    /// A structured choice that failed validation.
    Malformed(MalformedSelection),
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_capability_display() {
        let reason = MalformedSelection::UnknownCapability {
            capability: "shedule_meeting".into(),
        };
        assert_eq!(reason.to_string(), "unknown capability 'shedule_meeting'");
    }

    #[test]
    fn missing_argument_display() {
        let reason = MalformedSelection::MissingArgument {
            capability: "book_meeting".into(),
            parameter: "location".into(),
        };
        assert_eq!(
            reason.to_string(),
            "capability 'book_meeting' is missing required argument 'location'"
        );
    }

    #[test]
    fn malformed_selection_serde_tags_reason() {
        let reason = MalformedSelection::MissingArgument {
            capability: "book_meeting".into(),
            parameter: "location".into(),
        };
        let json = serde_json::to_value(&reason).unwrap();
        assert_eq!(json["reason"], "missing_argument");
        assert_eq!(json["capability"], "book_meeting");
        assert_eq!(json["parameter"], "location");
        let back: MalformedSelection = serde_json::from_value(json).unwrap();
        assert_eq!(reason, back);
    }

    #[test]
    fn choice_deserializes_without_arguments() {
        let choice: CapabilityChoice = serde_json::from_value(serde_json::json!({
            "name": "tts"
        }))
        .unwrap();
        assert_eq!(choice.name, "tts");
        assert!(choice.arguments.is_empty());
    }
}
