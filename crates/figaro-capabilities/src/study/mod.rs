//! Coursework capabilities backed by the study pipeline.

pub mod homework;
pub mod notes;
pub mod quiz;

pub use homework::CompleteHomeworkCapability;
pub use notes::OrganizeNotesCapability;
pub use quiz::QuizCapability;
