//! Core trait and DI abstractions for the capability system.
//!
//! Defines [`Capability`] — the trait every capability implements — plus all
//! dependency injection traits that capabilities use to reach vendor services.
//! The agent binary provides concrete implementations of these traits (live
//! where credentials exist, stubs otherwise).

use async_trait::async_trait;
use figaro_core::capability::{CapabilityOutput, CapabilitySpec};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;

use crate::errors::CapabilityError;

// ─────────────────────────────────────────────────────────────────────────────
// Capability context
// ─────────────────────────────────────────────────────────────────────────────

/// Execution context passed to every capability invocation.
#[derive(Clone, Debug)]
pub struct CapabilityContext {
    /// Unique ID of the turn this invocation belongs to.
    pub turn_id: String,
    /// Cancellation token for cooperative cancellation.
    pub cancellation: CancellationToken,
}

// ─────────────────────────────────────────────────────────────────────────────
// Capability trait
// ─────────────────────────────────────────────────────────────────────────────

/// The core trait that every capability must implement.
///
/// Each capability provides:
/// - **Schema** via [`spec()`](Capability::spec) — advertised to the reasoning
///   service as a function declaration
/// - **Execution** via [`execute()`](Capability::execute) — invoked with the
///   JSON arguments the reasoning service selected
#[async_trait]
pub trait Capability: Send + Sync {
    /// Capability name — the exact string sent to/from the reasoning service.
    fn name(&self) -> &str;

    /// Generate the declared schema for the reasoning service.
    fn spec(&self) -> CapabilitySpec;

    /// Execute the capability with JSON arguments.
    ///
    /// Argument *presence* has already been checked against the schema by the
    /// time this runs; implementations still validate types and content.
    async fn execute(
        &self,
        arguments: Map<String, Value>,
        ctx: &CapabilityContext,
    ) -> Result<CapabilityOutput, CapabilityError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Calendar types
// ─────────────────────────────────────────────────────────────────────────────

/// One upcoming calendar event.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Event start, as the calendar backend reports it (date or date-time).
    pub start: String,
    /// Event title.
    pub summary: String,
}

/// A fully-specified event to create on the calendar.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    /// Event title, shown at the top of the invitation.
    pub summary: String,
    /// Where the meeting takes place.
    pub location: String,
    /// Longer-form description of the meeting.
    pub description: String,
    /// Start time, RFC 3339 with offset (e.g. `2025-04-28T10:00:00-07:00`).
    pub start_time: String,
    /// End time, same format as `start_time`.
    pub end_time: String,
}

/// Confirmation returned after an event is created.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedEvent {
    /// Link to the created event, when the backend provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_link: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Dependency injection traits
// ─────────────────────────────────────────────────────────────────────────────

/// Calendar backend (`display_events`, `book_meeting`).
#[async_trait]
pub trait CalendarClient: Send + Sync {
    /// Fetch the next `n` upcoming events, soonest first.
    async fn upcoming_events(&self, n: u32) -> Result<Vec<CalendarEvent>, CapabilityError>;
    /// Create an event on the primary calendar.
    async fn book_event(&self, draft: &EventDraft) -> Result<BookedEvent, CapabilityError>;
}

/// Text-to-speech backend (`tts`).
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize the given text and play it to the user.
    async fn synthesize(&self, text: &str) -> Result<(), CapabilityError>;
}

/// Coursework backend (`complete_homework`, `organize_notes`, `quiz`).
///
/// Each method takes the file reference the reasoning service supplied and
/// returns a human-readable report of what was produced.
#[async_trait]
pub trait StudyPipeline: Send + Sync {
    /// Work through a homework assignment from the given files.
    async fn complete_homework(&self, files: &str) -> Result<String, CapabilityError>;
    /// Restructure lecture notes from the given files.
    async fn organize_notes(&self, files: &str) -> Result<String, CapabilityError>;
    /// Generate a quiz over past lecture content from the given files.
    async fn generate_quiz(&self, files: &str) -> Result<String, CapabilityError>;
}

/// A notebook edit to apply.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookEditRequest {
    /// Path of the notebook file to edit.
    pub notebook_path: String,
    /// Instruction describing how to modify the notebook content.
    pub prompt: String,
}

/// Jupyter notebook editing backend (`edit_jupyter`).
#[async_trait]
pub trait NotebookEditor: Send + Sync {
    /// Apply an edit to a notebook, returning a summary of the change.
    async fn apply_edit(&self, request: &NotebookEditRequest) -> Result<String, CapabilityError>;
}

/// File delivery backend (`send_files_to_slack`).
#[async_trait]
pub trait FileCourier: Send + Sync {
    /// Deliver two files to the configured workspace channel.
    async fn send_files(&self, file1: &str, file2: &str) -> Result<(), CapabilityError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// HTTP client
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP response from a fetch operation.
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
    /// Content-Type header value.
    pub content_type: Option<String>,
}

/// HTTP client for web operations (`search_linkd`).
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request and return the response.
    async fn get(&self, url: &str) -> Result<HttpResponse, CapabilityError>;

    /// Perform a GET request with custom headers.
    ///
    /// Default implementation ignores headers and falls back to `get()`.
    async fn get_with_headers(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<HttpResponse, CapabilityError> {
        let _ = headers;
        self.get(url).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
