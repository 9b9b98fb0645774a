//! Shared test utilities for the runtime pipeline.
//!
//! Provides schema-only and invocation-counting capabilities plus a small
//! catalog registry, so interpreter, dispatcher, and turn tests don't each
//! rebuild them.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use figaro_capabilities::errors::CapabilityError;
use figaro_capabilities::registry::CapabilityRegistry;
use figaro_capabilities::traits::{Capability, CapabilityContext};
use figaro_core::capability::{CapabilityOutput, CapabilitySpec, ParameterKind, ParameterSpec};
use serde_json::{Map, Value};

/// Schema-only capability whose execution always succeeds with "ok".
pub struct SpecCapability {
    spec: CapabilitySpec,
}

impl SpecCapability {
    pub fn new(spec: CapabilitySpec) -> Arc<Self> {
        Arc::new(Self { spec })
    }
}

#[async_trait]
impl Capability for SpecCapability {
    fn name(&self) -> &str {
        &self.spec.name
    }

    fn spec(&self) -> CapabilitySpec {
        self.spec.clone()
    }

    async fn execute(
        &self,
        _arguments: Map<String, Value>,
        _ctx: &CapabilityContext,
    ) -> Result<CapabilityOutput, CapabilityError> {
        Ok(CapabilityOutput::text("ok"))
    }
}

enum Behavior {
    Succeed(String),
    Fail(String),
}

/// Capability that counts invocations and follows a scripted behavior.
pub struct CountingCapability {
    spec: CapabilitySpec,
    invocations: AtomicUsize,
    behavior: Behavior,
}

impl CountingCapability {
    pub fn succeeding(spec: CapabilitySpec, summary: &str) -> Arc<Self> {
        Arc::new(Self {
            spec,
            invocations: AtomicUsize::new(0),
            behavior: Behavior::Succeed(summary.into()),
        })
    }

    pub fn failing(spec: CapabilitySpec, message: &str) -> Arc<Self> {
        Arc::new(Self {
            spec,
            invocations: AtomicUsize::new(0),
            behavior: Behavior::Fail(message.into()),
        })
    }

    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Capability for CountingCapability {
    fn name(&self) -> &str {
        &self.spec.name
    }

    fn spec(&self) -> CapabilitySpec {
        self.spec.clone()
    }

    async fn execute(
        &self,
        _arguments: Map<String, Value>,
        _ctx: &CapabilityContext,
    ) -> Result<CapabilityOutput, CapabilityError> {
        let _ = self.invocations.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Succeed(summary) => Ok(CapabilityOutput::text(summary.clone())),
            Behavior::Fail(message) => Err(CapabilityError::Internal {
                message: message.clone(),
            }),
        }
    }
}

/// Schema for the five-parameter meeting capability.
pub fn book_meeting_spec() -> CapabilitySpec {
    CapabilitySpec::new(
        "book_meeting",
        "schedule a meeting",
        vec![
            ParameterSpec::required("summary", ParameterKind::String, "title"),
            ParameterSpec::required("location", ParameterKind::String, "where"),
            ParameterSpec::required("description", ParameterKind::String, "details"),
            ParameterSpec::required("startTime", ParameterKind::String, "start"),
            ParameterSpec::required("endTime", ParameterKind::String, "end"),
        ],
    )
}

/// Schema for the all-optional speech capability.
pub fn tts_spec() -> CapabilitySpec {
    CapabilitySpec::new(
        "tts",
        "speak text",
        vec![ParameterSpec::optional(
            "text",
            ParameterKind::String,
            "what to say",
        )],
    )
}

/// Registry holding `tts` and `book_meeting` schema-only capabilities.
pub fn catalog_registry() -> CapabilityRegistry {
    let mut registry = CapabilityRegistry::new();
    registry.register(SpecCapability::new(tts_spec())).unwrap();
    registry
        .register(SpecCapability::new(book_meeting_spec()))
        .unwrap();
    registry
}
