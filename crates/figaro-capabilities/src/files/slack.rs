//! `send_files_to_slack` capability — deliver a pair of files to the
//! workspace channel.

use std::sync::Arc;

use async_trait::async_trait;
use figaro_core::capability::{CapabilityOutput, CapabilitySpec, ParameterKind, ParameterSpec};
use serde_json::{Map, Value, json};

use crate::arguments::required_string;
use crate::errors::CapabilityError;
use crate::traits::{Capability, CapabilityContext, FileCourier};

/// The `send_files_to_slack` capability forwards two files to the courier.
pub struct SendFilesToSlackCapability {
    courier: Arc<dyn FileCourier>,
}

impl SendFilesToSlackCapability {
    /// Create the capability with the given file courier.
    pub fn new(courier: Arc<dyn FileCourier>) -> Self {
        Self { courier }
    }
}

#[async_trait]
impl Capability for SendFilesToSlackCapability {
    fn name(&self) -> &str {
        "send_files_to_slack"
    }

    fn spec(&self) -> CapabilitySpec {
        CapabilitySpec::new(
            "send_files_to_slack",
            "send specified files to slack",
            vec![
                ParameterSpec::required(
                    "file1",
                    ParameterKind::String,
                    "First file to send, as a path or URL",
                ),
                ParameterSpec::required(
                    "file2",
                    ParameterKind::String,
                    "Second file to send, as a path or URL",
                ),
            ],
        )
    }

    async fn execute(
        &self,
        arguments: Map<String, Value>,
        _ctx: &CapabilityContext,
    ) -> Result<CapabilityOutput, CapabilityError> {
        let file1 = required_string(&arguments, "file1")?;
        let file2 = required_string(&arguments, "file2")?;

        self.courier.send_files(&file1, &file2).await?;

        Ok(CapabilityOutput::with_details(
            "Sent 2 files to Slack",
            json!({ "file1": file1, "file2": file2 }),
        ))
    }
}
