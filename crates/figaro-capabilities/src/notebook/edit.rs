//! `edit_jupyter` capability — apply a prompt-driven edit to a notebook.
//!
//! The notebook path comes from settings rather than from the reasoning
//! service; the declared schema only exposes the edit instruction.

use std::sync::Arc;

use async_trait::async_trait;
use figaro_core::capability::{CapabilityOutput, CapabilitySpec, ParameterKind, ParameterSpec};
use serde_json::{Map, Value, json};

use crate::arguments::required_string;
use crate::errors::CapabilityError;
use crate::traits::{Capability, CapabilityContext, NotebookEditRequest, NotebookEditor};

/// The `edit_jupyter` capability edits the configured notebook.
pub struct EditJupyterCapability {
    editor: Arc<dyn NotebookEditor>,
    notebook_path: Option<String>,
}

impl EditJupyterCapability {
    /// Create the capability with the given editor and configured notebook
    /// path (`None` when no notebook is configured).
    pub fn new(editor: Arc<dyn NotebookEditor>, notebook_path: Option<String>) -> Self {
        Self {
            editor,
            notebook_path,
        }
    }
}

#[async_trait]
impl Capability for EditJupyterCapability {
    fn name(&self) -> &str {
        "edit_jupyter"
    }

    fn spec(&self) -> CapabilitySpec {
        CapabilitySpec::new(
            "edit_jupyter",
            "open the jupyter notebook file and begin editing it based on a user's prompt",
            vec![ParameterSpec::required(
                "prompt",
                ParameterKind::String,
                "Instruction on how to modify the Jupyter notebook content.",
            )],
        )
    }

    async fn execute(
        &self,
        arguments: Map<String, Value>,
        _ctx: &CapabilityContext,
    ) -> Result<CapabilityOutput, CapabilityError> {
        let prompt = required_string(&arguments, "prompt")?;
        let Some(notebook_path) = self.notebook_path.clone() else {
            return Err(CapabilityError::Unavailable {
                feature: "Notebook editing".into(),
            });
        };

        let request = NotebookEditRequest {
            notebook_path,
            prompt,
        };
        let report = self.editor.apply_edit(&request).await?;

        Ok(CapabilityOutput::with_details(
            report,
            json!({
                "notebookPath": request.notebook_path,
                "prompt": request.prompt,
            }),
        ))
    }
}
