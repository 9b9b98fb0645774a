//! Turn controller — one utterance in, one outcome out.
//!
//! [`TurnController`] owns the full pipeline for a turn: assemble the prompt,
//! call the reasoning gateway once, interpret the reply, dispatch at most one
//! capability. `run_turn` is infallible; every failure path is folded into a
//! [`TurnOutcome`] variant, so transports can serialize whatever comes back.
//!
//! Turns are stateless. Nothing from one turn is visible to the next, and the
//! controller holds no locks, so concurrent turns only share the immutable
//! registry and gateway.

use std::sync::Arc;
use std::time::Instant;

use figaro_capabilities::registry::CapabilityRegistry;
use figaro_capabilities::traits::CapabilityContext;
use figaro_core::outcome::TurnOutcome;
use figaro_core::prompt::PromptContext;
use figaro_llm::gateway::ReasoningGateway;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use uuid::Uuid;

use crate::dispatcher::{dispatch, duration_ceil_ms};
use crate::interpreter::interpret;

/// Standing directives sent with every prompt.
///
/// Voice-assistant register: replies stay short and spoken-style, the service
/// acts through a capability whenever it has enough information, and prose
/// answers are funneled through `tts` instead of plain text.
pub const DEFAULT_DIRECTIVES: &str = "\
You are a hyperintelligent agentic system with a sense of humor. You will speak naturally and keep responses short, as if you were talking to me in person. Nobody likes a yapper.
You will do everything in your power to address the user's prompt. If you have enough information, use the given functions to perform certain tasks. You may make reasonable assumptions.
If you require more information, prompt the user to give you more information to work with.
You must NEVER output plain text. You must ALWAYS use a function call. Either to express yourself or execute an action. When calling functions, assume that ALL parameters are MANDATORY (REQUIRED).
Answering the prompt is your top priority. You must ALWAYS prioritize function calling in order to gather information or execute tasks BEFORE function calling to output using tts().";

/// Orchestrates single turns against a gateway and a capability registry.
pub struct TurnController {
    gateway: Arc<dyn ReasoningGateway>,
    registry: Arc<CapabilityRegistry>,
    directives: String,
}

impl TurnController {
    /// Controller with the default standing directives.
    #[must_use]
    pub fn new(gateway: Arc<dyn ReasoningGateway>, registry: Arc<CapabilityRegistry>) -> Self {
        Self::with_directives(gateway, registry, DEFAULT_DIRECTIVES)
    }

    /// Controller with caller-supplied directives.
    #[must_use]
    pub fn with_directives(
        gateway: Arc<dyn ReasoningGateway>,
        registry: Arc<CapabilityRegistry>,
        directives: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            registry,
            directives: directives.into(),
        }
    }

    /// The registry this controller dispatches against.
    #[must_use]
    pub fn registry(&self) -> &CapabilityRegistry {
        &self.registry
    }

    /// Run one turn to completion.
    pub async fn run_turn(&self, utterance: &str) -> TurnOutcome {
        self.run_turn_with_cancellation(utterance, CancellationToken::new())
            .await
    }

    /// Run one turn with an external cancellation handle.
    ///
    /// Cancelling after the capability body has started does not interrupt
    /// it; the token is checked up to the dispatch boundary.
    pub async fn run_turn_with_cancellation(
        &self,
        utterance: &str,
        cancellation: CancellationToken,
    ) -> TurnOutcome {
        let start = Instant::now();
        let turn_id = format!("turn_{}", Uuid::now_v7());
        info!(
            turn_id = %turn_id,
            gateway = self.gateway.name(),
            utterance_len = utterance.len(),
            "turn started"
        );

        let prompt = PromptContext::new(utterance, self.directives.clone());
        let capabilities = self.registry.specs();

        let outcome = match self.gateway.converse(&prompt, &capabilities).await {
            Ok(reply) => {
                let selection = interpret(&reply, &self.registry);
                let ctx = CapabilityContext {
                    turn_id: turn_id.clone(),
                    cancellation,
                };
                dispatch(selection, &self.registry, &ctx).await
            }
            Err(error) => {
                warn!(turn_id = %turn_id, error = %error, "reasoning gateway failed");
                TurnOutcome::GatewayFailure {
                    kind: error.kind(),
                    message: error.to_string(),
                }
            }
        };

        info!(
            turn_id = %turn_id,
            outcome = outcome.label(),
            duration_ms = duration_ceil_ms(start.elapsed()),
            "turn finished"
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use figaro_core::capability::CapabilitySpec;
    use figaro_core::outcome::GatewayFailureKind;
    use figaro_core::selection::CapabilityChoice;
    use figaro_llm::gateway::{GatewayError, GatewayReply, GatewayResult};
    use serde_json::json;
    use std::sync::Mutex;

    use super::*;
    use crate::testutil::{CountingCapability, catalog_registry, tts_spec};

    enum Script {
        Reply(GatewayReply),
        Timeout,
    }

    struct StubGateway {
        script: Script,
        seen_directives: Mutex<Vec<String>>,
        seen_spec_counts: Mutex<Vec<usize>>,
    }

    impl StubGateway {
        fn replying(reply: GatewayReply) -> Arc<Self> {
            Arc::new(Self {
                script: Script::Reply(reply),
                seen_directives: Mutex::new(Vec::new()),
                seen_spec_counts: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                script: Script::Timeout,
                seen_directives: Mutex::new(Vec::new()),
                seen_spec_counts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ReasoningGateway for StubGateway {
        fn name(&self) -> &'static str {
            "stub"
        }

        async fn converse(
            &self,
            prompt: &PromptContext,
            capabilities: &[CapabilitySpec],
        ) -> GatewayResult<GatewayReply> {
            self.seen_directives
                .lock()
                .unwrap()
                .push(prompt.directives.clone());
            self.seen_spec_counts
                .lock()
                .unwrap()
                .push(capabilities.len());
            match &self.script {
                Script::Reply(reply) => Ok(reply.clone()),
                Script::Timeout => Err(GatewayError::Timeout { timeout_ms: 8_000 }),
            }
        }
    }

    fn choice_reply(name: &str, arguments: serde_json::Value) -> GatewayReply {
        GatewayReply {
            choices: vec![CapabilityChoice {
                name: name.into(),
                arguments: arguments.as_object().cloned().unwrap_or_default(),
            }],
            text: None,
        }
    }

    #[tokio::test]
    async fn valid_choice_runs_the_capability() {
        let gateway = StubGateway::replying(choice_reply("tts", json!({"text": "hello"})));
        let controller = TurnController::new(gateway.clone(), Arc::new(catalog_registry()));

        let outcome = controller.run_turn("say hello").await;

        match outcome {
            TurnOutcome::Dispatched { capability, .. } => assert_eq!(capability, "tts"),
            other => panic!("expected dispatched outcome, got {other:?}"),
        }
        assert_eq!(gateway.seen_spec_counts.lock().unwrap().as_slice(), &[2]);
    }

    #[tokio::test]
    async fn gateway_failure_short_circuits_dispatch() {
        let capability = CountingCapability::succeeding(tts_spec(), "spoken");
        let mut registry = CapabilityRegistry::new();
        registry.register(capability.clone()).unwrap();
        let controller = TurnController::new(StubGateway::failing(), Arc::new(registry));

        let outcome = controller.run_turn("say hello").await;

        match outcome {
            TurnOutcome::GatewayFailure { kind, message } => {
                assert_eq!(kind, GatewayFailureKind::Timeout);
                assert!(message.contains("8000ms"), "message was {message:?}");
            }
            other => panic!("expected gateway failure, got {other:?}"),
        }
        assert_eq!(capability.invocations(), 0);
    }

    #[tokio::test]
    async fn prose_reply_becomes_noop_text() {
        let gateway = StubGateway::replying(GatewayReply {
            choices: Vec::new(),
            text: Some("What file should I use?".into()),
        });
        let controller = TurnController::new(gateway, Arc::new(catalog_registry()));

        let outcome = controller.run_turn("do my homework").await;

        assert_eq!(
            outcome,
            TurnOutcome::NoOpText {
                text: "What file should I use?".into(),
            }
        );
    }

    #[tokio::test]
    async fn unknown_choice_is_rejected() {
        let gateway = StubGateway::replying(choice_reply("shedule_meeting", json!({})));
        let controller = TurnController::new(gateway, Arc::new(catalog_registry()));

        let outcome = controller.run_turn("book something").await;

        assert_matches!(outcome, TurnOutcome::RejectedSelection { .. });
    }

    #[tokio::test]
    async fn cancelled_turn_reports_failure_without_invoking() {
        let capability = CountingCapability::succeeding(tts_spec(), "spoken");
        let mut registry = CapabilityRegistry::new();
        registry.register(capability.clone()).unwrap();
        let gateway = StubGateway::replying(choice_reply("tts", json!({"text": "hi"})));
        let controller = TurnController::new(gateway, Arc::new(registry));

        let token = CancellationToken::new();
        token.cancel();
        let outcome = controller
            .run_turn_with_cancellation("say hi", token)
            .await;

        match outcome {
            TurnOutcome::CapabilityFailure { capability: name, error } => {
                assert_eq!(name, "tts");
                assert_eq!(error, "cancelled before dispatch");
            }
            other => panic!("expected capability failure, got {other:?}"),
        }
        assert_eq!(capability.invocations(), 0);
    }

    #[tokio::test]
    async fn custom_directives_reach_the_gateway() {
        let gateway = StubGateway::replying(GatewayReply::default());
        let controller = TurnController::with_directives(
            gateway.clone(),
            Arc::new(catalog_registry()),
            "Answer in pirate speak.",
        );

        let _ = controller.run_turn("hello").await;

        assert_eq!(
            gateway.seen_directives.lock().unwrap().as_slice(),
            &["Answer in pirate speak.".to_owned()]
        );
    }

    #[test]
    fn default_directives_demand_function_calls() {
        assert!(DEFAULT_DIRECTIVES.contains("NEVER output plain text"));
        assert!(DEFAULT_DIRECTIVES.contains("tts()"));
    }
}
