//! `quiz` capability — generate a quiz over past lecture content.

use std::sync::Arc;

use async_trait::async_trait;
use figaro_core::capability::{CapabilityOutput, CapabilitySpec, ParameterKind, ParameterSpec};
use serde_json::{Map, Value, json};

use crate::arguments::required_string;
use crate::errors::CapabilityError;
use crate::traits::{Capability, CapabilityContext, StudyPipeline};

/// The `quiz` capability asks the study pipeline to quiz the user on
/// past lecture content.
pub struct QuizCapability {
    pipeline: Arc<dyn StudyPipeline>,
}

impl QuizCapability {
    /// Create the capability with the given study pipeline.
    pub fn new(pipeline: Arc<dyn StudyPipeline>) -> Self {
        Self { pipeline }
    }
}

#[async_trait]
impl Capability for QuizCapability {
    fn name(&self) -> &str {
        "quiz"
    }

    fn spec(&self) -> CapabilitySpec {
        CapabilitySpec::new(
            "quiz",
            "begin quizzing the user on past lecture content",
            vec![ParameterSpec::required(
                "files",
                ParameterKind::String,
                "Path or URL of the lecture file to quiz from",
            )],
        )
    }

    async fn execute(
        &self,
        arguments: Map<String, Value>,
        _ctx: &CapabilityContext,
    ) -> Result<CapabilityOutput, CapabilityError> {
        let files = required_string(&arguments, "files")?;
        let report = self.pipeline.generate_quiz(&files).await?;
        Ok(CapabilityOutput::with_details(
            report,
            json!({ "files": files }),
        ))
    }
}
