//! # figaro-capabilities
//!
//! Capability layer for the Figaro orchestrator:
//!
//! - [`Capability`] — the trait every capability implements
//! - [`CapabilityRegistry`] — insertion-ordered index of registered capabilities
//! - Dependency injection traits for vendor services (calendar, speech,
//!   study pipeline, notebook editing, file delivery, HTTP)
//! - The nine capability implementations the orchestrator ships with
//! - Stub providers so every capability can register even when its backend
//!   is not configured

#![deny(unsafe_code)]

pub mod arguments;
pub mod calendar;
pub mod errors;
pub mod files;
pub mod notebook;
pub mod providers;
pub mod registry;
pub mod search;
pub mod speech;
pub mod study;
pub mod traits;

#[cfg(test)]
pub(crate) mod testutil;

pub use errors::CapabilityError;
pub use registry::CapabilityRegistry;
pub use traits::{
    BookedEvent, CalendarClient, CalendarEvent, Capability, CapabilityContext, EventDraft,
    FileCourier, HttpClient, HttpResponse, NotebookEditor, SpeechSynthesizer, StudyPipeline,
};
