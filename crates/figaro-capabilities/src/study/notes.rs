//! `organize_notes` capability — restructure lecture notes from files.

use std::sync::Arc;

use async_trait::async_trait;
use figaro_core::capability::{CapabilityOutput, CapabilitySpec, ParameterKind, ParameterSpec};
use serde_json::{Map, Value, json};

use crate::arguments::required_string;
use crate::errors::CapabilityError;
use crate::traits::{Capability, CapabilityContext, StudyPipeline};

/// The `organize_notes` capability asks the study pipeline to clean up and
/// restructure a set of lecture notes.
pub struct OrganizeNotesCapability {
    pipeline: Arc<dyn StudyPipeline>,
}

impl OrganizeNotesCapability {
    /// Create the capability with the given study pipeline.
    pub fn new(pipeline: Arc<dyn StudyPipeline>) -> Self {
        Self { pipeline }
    }
}

#[async_trait]
impl Capability for OrganizeNotesCapability {
    fn name(&self) -> &str {
        "organize_notes"
    }

    fn spec(&self) -> CapabilitySpec {
        CapabilitySpec::new(
            "organize_notes",
            "organize your notes",
            vec![ParameterSpec::required(
                "files",
                ParameterKind::String,
                "Path or URL of the notes file to organize",
            )],
        )
    }

    async fn execute(
        &self,
        arguments: Map<String, Value>,
        _ctx: &CapabilityContext,
    ) -> Result<CapabilityOutput, CapabilityError> {
        let files = required_string(&arguments, "files")?;
        let report = self.pipeline.organize_notes(&files).await?;
        Ok(CapabilityOutput::with_details(
            report,
            json!({ "files": files }),
        ))
    }
}
