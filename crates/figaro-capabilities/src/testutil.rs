//! Shared test utilities for capability implementations.
//!
//! Provides `make_ctx()` and `args()` — previously copy-pasted across every
//! capability test module.

use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;

use crate::traits::CapabilityContext;

/// Build a standard test `CapabilityContext`.
pub fn make_ctx() -> CapabilityContext {
    CapabilityContext {
        turn_id: "turn-1".into(),
        cancellation: CancellationToken::new(),
    }
}

/// Convert a `json!({...})` object literal into an argument map.
///
/// Panics if the value is not a JSON object (test misuse).
pub fn args(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object literal, got {other}"),
    }
}
