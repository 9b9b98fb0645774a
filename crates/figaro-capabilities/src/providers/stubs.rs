//! Stub implementations of DI traits for capabilities whose backends aren't
//! configured.
//!
//! These allow ALL nine capabilities to be registered (so the schema advertised
//! to the reasoning service stays stable) while gracefully returning
//! "not configured" errors at execution time.

use async_trait::async_trait;

use crate::errors::CapabilityError;
use crate::traits::{
    BookedEvent, CalendarClient, CalendarEvent, EventDraft, FileCourier, NotebookEditRequest,
    NotebookEditor, SpeechSynthesizer, StudyPipeline,
};

fn not_configured(feature: &str) -> CapabilityError {
    CapabilityError::Unavailable {
        feature: feature.to_owned(),
    }
}

// ─── CalendarClient ──────────────────────────────────────────────────────────

/// Stub calendar client — no calendar credentials configured.
pub struct StubCalendarClient;

#[async_trait]
impl CalendarClient for StubCalendarClient {
    async fn upcoming_events(&self, _n: u32) -> Result<Vec<CalendarEvent>, CapabilityError> {
        Err(not_configured("Calendar access"))
    }
    async fn book_event(&self, _draft: &EventDraft) -> Result<BookedEvent, CapabilityError> {
        Err(not_configured("Calendar access"))
    }
}

// ─── SpeechSynthesizer ───────────────────────────────────────────────────────

/// Stub speech synthesizer — no TTS backend configured.
pub struct StubSpeechSynthesizer;

#[async_trait]
impl SpeechSynthesizer for StubSpeechSynthesizer {
    async fn synthesize(&self, _text: &str) -> Result<(), CapabilityError> {
        Err(not_configured("Speech synthesis"))
    }
}

// ─── StudyPipeline ───────────────────────────────────────────────────────────

/// Stub study pipeline — no coursework backend configured.
pub struct StubStudyPipeline;

#[async_trait]
impl StudyPipeline for StubStudyPipeline {
    async fn complete_homework(&self, _files: &str) -> Result<String, CapabilityError> {
        Err(not_configured("Homework completion"))
    }
    async fn organize_notes(&self, _files: &str) -> Result<String, CapabilityError> {
        Err(not_configured("Note organization"))
    }
    async fn generate_quiz(&self, _files: &str) -> Result<String, CapabilityError> {
        Err(not_configured("Quiz generation"))
    }
}

// ─── NotebookEditor ──────────────────────────────────────────────────────────

/// Stub notebook editor — no notebook backend configured.
pub struct StubNotebookEditor;

#[async_trait]
impl NotebookEditor for StubNotebookEditor {
    async fn apply_edit(&self, _request: &NotebookEditRequest) -> Result<String, CapabilityError> {
        Err(not_configured("Notebook editing"))
    }
}

// ─── FileCourier ─────────────────────────────────────────────────────────────

/// Stub file courier — no workspace delivery configured.
pub struct StubFileCourier;

#[async_trait]
impl FileCourier for StubFileCourier {
    async fn send_files(&self, _file1: &str, _file2: &str) -> Result<(), CapabilityError> {
        Err(not_configured("File delivery"))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
