//! # figaro-runtime
//!
//! The per-turn pipeline of the Figaro orchestrator:
//!
//! - [`interpret`] — classify a reasoning-service reply against the registry
//! - [`dispatch`] — turn a selection into at most one capability invocation
//! - [`TurnController`] — drive one full utterance-to-outcome round trip
//!
//! Every turn is stateless: prompt in, [`TurnOutcome`](figaro_core::TurnOutcome)
//! out, nothing remembered in between.

#![deny(unsafe_code)]

pub mod dispatcher;
pub mod interpreter;
pub mod turn;

#[cfg(test)]
pub(crate) mod testutil;

pub use dispatcher::dispatch;
pub use interpreter::interpret;
pub use turn::{DEFAULT_DIRECTIVES, TurnController};
