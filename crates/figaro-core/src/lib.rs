//! # figaro-core
//!
//! Foundation types for the figaro orchestrator.
//!
//! This crate provides the shared vocabulary that all other figaro crates
//! depend on:
//!
//! - **Capability schemas**: [`CapabilitySpec`] and [`ParameterSpec`] describe
//!   the action surface declared to the reasoning service
//! - **Prompt context**: [`PromptContext`] carries one turn's utterance,
//!   timestamp, and standing directives
//! - **Selections**: [`Selection`] and [`MalformedSelection`] classify an
//!   interpreted reasoning-service reply
//! - **Outcomes**: [`TurnOutcome`] is the single result type every turn
//!   resolves to, failures included
//! - **Errors**: [`RegistryError`] via `thiserror`

#![deny(unsafe_code)]

pub mod capability;
pub mod errors;
pub mod outcome;
pub mod prompt;
pub mod selection;

pub use capability::{CapabilityOutput, CapabilitySpec, ParameterKind, ParameterSpec};
pub use errors::RegistryError;
pub use outcome::{GatewayFailureKind, TurnOutcome};
pub use prompt::PromptContext;
pub use selection::{CapabilityChoice, MalformedSelection, Selection};
