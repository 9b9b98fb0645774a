//! `display_events` capability — list the next n calendar events.

use std::sync::Arc;

use async_trait::async_trait;
use figaro_core::capability::{CapabilityOutput, CapabilitySpec, ParameterKind, ParameterSpec};
use serde_json::{Map, Value, json};

use crate::arguments::required_integer;
use crate::errors::CapabilityError;
use crate::traits::{Capability, CapabilityContext, CalendarClient};

/// Upper bound on how many events one invocation may fetch.
const MAX_EVENTS: i64 = 250;

/// The `display_events` capability fetches upcoming calendar events.
pub struct DisplayEventsCapability {
    calendar: Arc<dyn CalendarClient>,
}

impl DisplayEventsCapability {
    /// Create the capability with the given calendar client.
    pub fn new(calendar: Arc<dyn CalendarClient>) -> Self {
        Self { calendar }
    }
}

#[async_trait]
impl Capability for DisplayEventsCapability {
    fn name(&self) -> &str {
        "display_events"
    }

    fn spec(&self) -> CapabilitySpec {
        CapabilitySpec::new(
            "display_events",
            "fetch the last n number of events",
            vec![ParameterSpec::required(
                "n",
                ParameterKind::Integer,
                "Number of events to fetch from calendar (if not specified, default to 10)",
            )],
        )
    }

    async fn execute(
        &self,
        arguments: Map<String, Value>,
        _ctx: &CapabilityContext,
    ) -> Result<CapabilityOutput, CapabilityError> {
        let n = required_integer(&arguments, "n")?;
        if n <= 0 {
            return Err(CapabilityError::Validation {
                message: format!("argument 'n' must be positive, got {n}"),
            });
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = n.min(MAX_EVENTS) as u32;

        let events = self.calendar.upcoming_events(n).await?;
        if events.is_empty() {
            return Ok(CapabilityOutput::text("No upcoming events found."));
        }

        let listing = events
            .iter()
            .map(|e| format!("{} {}", e.start, e.summary))
            .collect::<Vec<_>>()
            .join("\n");

        Ok(CapabilityOutput::with_details(
            listing,
            json!({ "count": events.len() }),
        ))
    }
}
