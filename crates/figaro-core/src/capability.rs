//! Capability schema and result types.
//!
//! Defines the declared action surface the orchestrator advertises to the
//! reasoning service: each capability has a name, a description, and an
//! ordered parameter schema. Also defines the opaque result a capability
//! returns on success.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ─────────────────────────────────────────────────────────────────────────────
// Parameter schema
// ─────────────────────────────────────────────────────────────────────────────

/// Primitive type of a capability parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    /// UTF-8 text.
    String,
    /// Whole number.
    Integer,
    /// Floating-point number.
    Number,
    /// True/false flag.
    Boolean,
}

impl ParameterKind {
    /// JSON Schema type keyword for this kind.
    #[must_use]
    pub fn schema_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

/// One named parameter in a capability schema.
///
/// Declaration order is significant: argument validation reports the first
/// missing required parameter in this order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Parameter name exactly as the reasoning service must supply it.
    pub name: String,
    /// Primitive type.
    pub kind: ParameterKind,
    /// Whether the parameter must be present for dispatch.
    pub required: bool,
    /// Human-readable description sent to the reasoning service.
    pub description: String,
}

impl ParameterSpec {
    /// Create a required parameter.
    #[must_use]
    pub fn required(
        name: impl Into<String>,
        kind: ParameterKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            required: true,
            description: description.into(),
        }
    }

    /// Create an optional parameter.
    #[must_use]
    pub fn optional(
        name: impl Into<String>,
        kind: ParameterKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            description: description.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Capability spec
// ─────────────────────────────────────────────────────────────────────────────

/// Declared schema for one capability.
///
/// Specs are built once at startup and never mutated; the set of registered
/// specs is the fixed contract between the orchestrator and the reasoning
/// service for the lifetime of a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapabilitySpec {
    /// Capability name (unique within a registry).
    pub name: String,
    /// Human-readable description sent to the reasoning service.
    pub description: String,
    /// Ordered parameter schema.
    pub parameters: Vec<ParameterSpec>,
}

impl CapabilitySpec {
    /// Create a spec from a name, description, and ordered parameters.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Vec<ParameterSpec>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }

    /// Required parameters in declaration order.
    pub fn required_parameters(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.parameters.iter().filter(|p| p.required)
    }

    /// Render the parameter schema as a JSON Schema object.
    ///
    /// Shape: `{"type": "object", "properties": {...}, "required": [...]}`.
    /// The `required` array is omitted when no parameter is required.
    #[must_use]
    pub fn parameters_schema(&self) -> Value {
        let mut properties = serde_json::Map::new();
        for param in &self.parameters {
            let _ = properties.insert(
                param.name.clone(),
                serde_json::json!({
                    "type": param.kind.schema_type(),
                    "description": param.description,
                }),
            );
        }

        let mut schema = serde_json::Map::new();
        let _ = schema.insert("type".into(), Value::String("object".into()));
        let _ = schema.insert("properties".into(), Value::Object(properties));

        let required: Vec<Value> = self
            .required_parameters()
            .map(|p| Value::String(p.name.clone()))
            .collect();
        if !required.is_empty() {
            let _ = schema.insert("required".into(), Value::Array(required));
        }

        Value::Object(schema)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Capability output
// ─────────────────────────────────────────────────────────────────────────────

/// Result of a successful capability invocation.
///
/// Opaque to the orchestrator beyond success: the summary is user-facing
/// text and `details` carries capability-specific metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapabilityOutput {
    /// Short human-readable description of what happened.
    pub summary: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl CapabilityOutput {
    /// Create a text-only output.
    #[must_use]
    pub fn text(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            details: None,
        }
    }

    /// Create an output with structured details attached.
    #[must_use]
    pub fn with_details(summary: impl Into<String>, details: Value) -> Self {
        Self {
            summary: summary.into(),
            details: Some(details),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
