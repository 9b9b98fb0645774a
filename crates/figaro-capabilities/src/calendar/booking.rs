//! `book_meeting` capability — create a calendar event from a full draft.
//!
//! All five parameters are required and their declaration order is load
//! bearing: when the reasoning service omits one, the orchestrator reports
//! the first missing parameter in this order.

use std::sync::Arc;

use async_trait::async_trait;
use figaro_core::capability::{CapabilityOutput, CapabilitySpec, ParameterKind, ParameterSpec};
use serde_json::{Map, Value};

use crate::arguments::required_string;
use crate::errors::CapabilityError;
use crate::traits::{Capability, CapabilityContext, CalendarClient, EventDraft};

/// The `book_meeting` capability schedules a meeting on the calendar.
pub struct BookMeetingCapability {
    calendar: Arc<dyn CalendarClient>,
}

impl BookMeetingCapability {
    /// Create the capability with the given calendar client.
    pub fn new(calendar: Arc<dyn CalendarClient>) -> Self {
        Self { calendar }
    }
}

#[async_trait]
impl Capability for BookMeetingCapability {
    fn name(&self) -> &str {
        "book_meeting"
    }

    fn spec(&self) -> CapabilitySpec {
        CapabilitySpec::new(
            "book_meeting",
            "schedule a meeting on google calendar on behalf of user",
            vec![
                ParameterSpec::required(
                    "summary",
                    ParameterKind::String,
                    "The title of the meeting, what appears at the top of the invitation. \
                     This should be at most a few words long.",
                ),
                ParameterSpec::required(
                    "location",
                    ParameterKind::String,
                    "Location of the meeting. If not specified, default to online (Google Meeting)",
                ),
                ParameterSpec::required(
                    "description",
                    ParameterKind::String,
                    "Longer form description of what this email is about. If not specified, \
                     default to 'coffee chat'",
                ),
                ParameterSpec::required(
                    "startTime",
                    ParameterKind::String,
                    "Start time of meeting, represented similar to 2025-04-28T10:00:00-07:00 \
                     format, in PST (Los Angeles) time.",
                ),
                ParameterSpec::required(
                    "endTime",
                    ParameterKind::String,
                    "End time of meeting, represented similar to 2025-04-28T09:00:00-07:00 \
                     format, in PST (Los Angeles) time. If not specified, default to 1 hour \
                     after start time",
                ),
            ],
        )
    }

    async fn execute(
        &self,
        arguments: Map<String, Value>,
        _ctx: &CapabilityContext,
    ) -> Result<CapabilityOutput, CapabilityError> {
        let draft = EventDraft {
            summary: required_string(&arguments, "summary")?,
            location: required_string(&arguments, "location")?,
            description: required_string(&arguments, "description")?,
            start_time: required_string(&arguments, "startTime")?,
            end_time: required_string(&arguments, "endTime")?,
        };

        let booked = self.calendar.book_event(&draft).await?;

        let summary = match &booked.html_link {
            Some(link) => format!("Event created: {link}"),
            None => format!("Meeting '{}' booked", draft.summary),
        };
        Ok(CapabilityOutput::with_details(
            summary,
            serde_json::to_value(&draft)?,
        ))
    }
}
