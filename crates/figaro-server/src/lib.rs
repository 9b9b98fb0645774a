//! # figaro-server
//!
//! Axum HTTP surface for the figaro orchestrator.
//!
//! - `POST /api/turn`: run one orchestrated turn, reply with the serialized
//!   [`figaro_core::TurnOutcome`]
//! - `GET /health`: liveness probe with uptime and capability count
//! - Permissive CORS so browser frontends and bots can call directly
//! - Graceful shutdown via a `CancellationToken`
//!
//! The server holds no per-request state beyond the shared
//! [`figaro_runtime::TurnController`]; turns are independent by construction.

#![deny(unsafe_code)]

pub mod config;
pub mod health;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use server::{AppState, FigaroServer};
