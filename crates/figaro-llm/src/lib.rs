//! # figaro-llm
//!
//! Reasoning-gateway abstraction and the Google Gemini implementation.
//!
//! The orchestrator talks to the remote reasoning service through the
//! [`ReasoningGateway`] trait: one bounded, cancellable `converse` call per
//! turn, no internal retries. The `google` module implements the trait over
//! the Gemini `generateContent` API with API-key authentication.

#![deny(unsafe_code)]

pub mod gateway;
pub mod google;

pub use gateway::{GatewayError, GatewayReply, GatewayResult, ReasoningGateway};
pub use google::{GoogleGateway, GoogleGatewayConfig};
