//! `tts` capability — verbal feedback through the speech backend.
//!
//! The reasoning service uses this for everything it wants to *say* to the
//! user, so it is the one capability whose single parameter is optional in
//! the declared schema.

use std::sync::Arc;

use async_trait::async_trait;
use figaro_core::capability::{CapabilityOutput, CapabilitySpec, ParameterKind, ParameterSpec};
use serde_json::{Map, Value, json};

use crate::arguments::optional_string;
use crate::errors::CapabilityError;
use crate::traits::{Capability, CapabilityContext, SpeechSynthesizer};

/// The `tts` capability speaks text back to the user.
pub struct SpeakCapability {
    speech: Arc<dyn SpeechSynthesizer>,
}

impl SpeakCapability {
    /// Create the capability with the given speech backend.
    pub fn new(speech: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { speech }
    }
}

#[async_trait]
impl Capability for SpeakCapability {
    fn name(&self) -> &str {
        "tts"
    }

    fn spec(&self) -> CapabilitySpec {
        CapabilitySpec::new(
            "tts",
            "give verbal feedback to user in the form of text to speech",
            vec![ParameterSpec::optional(
                "text",
                ParameterKind::String,
                "text to be spoken to the user. This will go through a TTS API",
            )],
        )
    }

    async fn execute(
        &self,
        arguments: Map<String, Value>,
        _ctx: &CapabilityContext,
    ) -> Result<CapabilityOutput, CapabilityError> {
        let text = optional_string(&arguments, "text").unwrap_or_default();
        if text.trim().is_empty() {
            return Err(CapabilityError::Validation {
                message: "nothing to speak: 'text' is empty".into(),
            });
        }

        self.speech.synthesize(&text).await?;

        Ok(CapabilityOutput::with_details(
            format!("Spoke {} characters aloud", text.chars().count()),
            json!({ "text": text }),
        ))
    }
}
