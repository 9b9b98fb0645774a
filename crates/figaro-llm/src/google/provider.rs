//! Google Gemini gateway implementing the [`ReasoningGateway`] trait.
//!
//! One non-streaming `generateContent` round trip per turn, authenticated
//! with an API key in the URL. The whole round trip runs under a bounded
//! wait; when the bound elapses the future is dropped, which abandons the
//! in-flight request.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};

use figaro_core::capability::CapabilitySpec;
use figaro_core::prompt::PromptContext;
use figaro_core::selection::CapabilityChoice;

use crate::gateway::{GatewayError, GatewayReply, GatewayResult, ReasoningGateway};

use super::types::{
    DEFAULT_BASE_URL, GeminiContent, GeminiPart, GenerateContentResponse, GenerationConfig,
    SystemInstruction, SystemPart, declarations_from_specs, default_safety_settings,
};

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Google gateway configuration.
#[derive(Clone, Debug)]
pub struct GoogleGatewayConfig {
    /// Model ID (e.g., `gemini-2.5-flash`).
    pub model: String,
    /// API key, sent as a URL query parameter.
    pub api_key: String,
    /// Base URL override (testing, proxies).
    pub base_url: Option<String>,
    /// Bounded wait for one round trip, in milliseconds.
    pub timeout_ms: u64,
    /// Cap on generated tokens per reply.
    pub max_output_tokens: u32,
    /// Sampling temperature; `None` uses the service default.
    pub temperature: Option<f64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Gateway
// ─────────────────────────────────────────────────────────────────────────────

/// Google Gemini reasoning gateway.
pub struct GoogleGateway {
    /// Gateway configuration.
    config: GoogleGatewayConfig,
    /// HTTP client (reused across requests).
    client: reqwest::Client,
}

impl GoogleGateway {
    /// Create a new gateway.
    #[must_use]
    pub fn new(config: GoogleGatewayConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Create a new gateway with a shared HTTP client.
    #[must_use]
    pub fn with_client(config: GoogleGatewayConfig, client: reqwest::Client) -> Self {
        info!(
            model = %config.model,
            timeout_ms = config.timeout_ms,
            "Google gateway initialized"
        );
        Self { config, client }
    }

    /// API URL for a given action.
    fn api_url(&self, action: &str) -> String {
        let base = self.config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        format!(
            "{base}/models/{}:{action}?key={}",
            self.config.model, self.config.api_key
        )
    }

    /// Build the request body for one turn.
    fn build_body(&self, prompt: &PromptContext, capabilities: &[CapabilitySpec]) -> Value {
        let contents = vec![GeminiContent {
            role: "user".into(),
            parts: vec![GeminiPart::Text {
                text: prompt.user_text(),
            }],
        }];

        let generation_config = GenerationConfig {
            max_output_tokens: Some(self.config.max_output_tokens),
            temperature: self.config.temperature,
        };

        let mut body = serde_json::json!({
            "contents": contents,
            "generationConfig": generation_config,
            "safetySettings": default_safety_settings(),
        });

        if !capabilities.is_empty() {
            body["tools"] =
                serde_json::to_value(declarations_from_specs(capabilities)).unwrap_or_default();
        }

        if !prompt.directives.is_empty() {
            let instruction = SystemInstruction {
                parts: vec![SystemPart {
                    text: prompt.directives.clone(),
                }],
            };
            body["systemInstruction"] = serde_json::to_value(instruction).unwrap_or_default();
        }

        body
    }

    /// One `generateContent` round trip, without the bounded-wait wrapper.
    async fn converse_inner(
        &self,
        prompt: &PromptContext,
        capabilities: &[CapabilitySpec],
    ) -> GatewayResult<GatewayReply> {
        let body = self.build_body(prompt, capabilities);
        let url = self.api_url("generateContent");

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            let message = parse_api_error(&body_text, status.as_u16());
            warn!(status = status.as_u16(), message = %message, "Gemini API error");
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body_text = response.text().await?;
        let parsed: GenerateContentResponse =
            serde_json::from_str(&body_text).map_err(|e| GatewayError::MalformedResponse {
                message: format!("unparsable response body: {e}"),
            })?;

        if let Some(ref usage) = parsed.usage_metadata {
            debug!(
                prompt_tokens = usage.prompt_token_count,
                output_tokens = usage.candidates_token_count,
                "generateContent round trip complete"
            );
        }

        extract_reply(parsed)
    }
}

/// Extract choices and text from a parsed response.
///
/// A reply with no candidates, or a candidate with no parts, is malformed:
/// the conversational contract requires the model to answer with a function
/// call or text.
fn extract_reply(response: GenerateContentResponse) -> GatewayResult<GatewayReply> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(GatewayError::MalformedResponse {
            message: "no candidates in response".into(),
        });
    };

    let finish_reason = candidate
        .finish_reason
        .unwrap_or_else(|| "unknown".to_string());
    let parts = candidate.content.map(|c| c.parts).unwrap_or_default();
    if parts.is_empty() {
        return Err(GatewayError::MalformedResponse {
            message: format!("candidate has no parts (finish reason: {finish_reason})"),
        });
    }

    let mut choices = Vec::new();
    let mut text_parts: Vec<String> = Vec::new();
    for part in parts {
        match part {
            GeminiPart::FunctionCall { function_call } => {
                let arguments = match function_call.args {
                    Value::Object(map) => map,
                    _ => Map::new(),
                };
                choices.push(CapabilityChoice {
                    name: function_call.name,
                    arguments,
                });
            }
            GeminiPart::Text { text } => text_parts.push(text),
        }
    }

    let text = if text_parts.is_empty() {
        None
    } else {
        Some(text_parts.concat())
    };

    Ok(GatewayReply { choices, text })
}

/// Parse an API error response body into a message.
fn parse_api_error(body: &str, status: u16) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        if let Some(message) = json["error"]["message"].as_str() {
            return message.to_string();
        }
    }
    format!("HTTP {status}: {body}")
}

#[async_trait]
impl ReasoningGateway for GoogleGateway {
    fn name(&self) -> &'static str {
        "google"
    }

    #[instrument(skip_all, fields(gateway = "google", model = %self.config.model))]
    async fn converse(
        &self,
        prompt: &PromptContext,
        capabilities: &[CapabilitySpec],
    ) -> GatewayResult<GatewayReply> {
        debug!(
            capability_count = capabilities.len(),
            "starting generateContent call"
        );
        let bound = Duration::from_millis(self.config.timeout_ms);
        match tokio::time::timeout(bound, self.converse_inner(prompt, capabilities)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(timeout_ms = self.config.timeout_ms, "gateway call timed out");
                Err(GatewayError::Timeout {
                    timeout_ms: self.config.timeout_ms,
                })
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
