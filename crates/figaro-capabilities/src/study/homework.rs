//! `complete_homework` capability — work through an assignment from files.

use std::sync::Arc;

use async_trait::async_trait;
use figaro_core::capability::{CapabilityOutput, CapabilitySpec, ParameterKind, ParameterSpec};
use serde_json::{Map, Value, json};

use crate::arguments::required_string;
use crate::errors::CapabilityError;
use crate::traits::{Capability, CapabilityContext, StudyPipeline};

/// The `complete_homework` capability hands an assignment to the study
/// pipeline and reports what was produced.
pub struct CompleteHomeworkCapability {
    pipeline: Arc<dyn StudyPipeline>,
}

impl CompleteHomeworkCapability {
    /// Create the capability with the given study pipeline.
    pub fn new(pipeline: Arc<dyn StudyPipeline>) -> Self {
        Self { pipeline }
    }
}

#[async_trait]
impl Capability for CompleteHomeworkCapability {
    fn name(&self) -> &str {
        "complete_homework"
    }

    fn spec(&self) -> CapabilitySpec {
        CapabilitySpec::new(
            "complete_homework",
            "complete a homework assignment from the given files",
            vec![ParameterSpec::required(
                "files",
                ParameterKind::String,
                "Path or URL of the assignment file to work from",
            )],
        )
    }

    async fn execute(
        &self,
        arguments: Map<String, Value>,
        _ctx: &CapabilityContext,
    ) -> Result<CapabilityOutput, CapabilityError> {
        let files = required_string(&arguments, "files")?;
        let report = self.pipeline.complete_homework(&files).await?;
        Ok(CapabilityOutput::with_details(
            report,
            json!({ "files": files }),
        ))
    }
}
