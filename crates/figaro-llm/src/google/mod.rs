//! Google/Gemini reasoning-gateway implementation.

pub mod provider;
pub mod types;

pub use provider::{GoogleGateway, GoogleGatewayConfig};
