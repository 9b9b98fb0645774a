//! # figaro-settings
//!
//! Layered settings loading for the figaro orchestrator.
//!
//! Settings come from three layers, lowest priority first:
//!
//! 1. Compiled defaults ([`FigaroSettings::default()`])
//! 2. `~/.figaro/settings.json`, deep-merged over the defaults
//! 3. `FIGARO_*` environment variables
//!
//! Secrets (the Gemini API key, the Linkd token) are never read from the
//! settings file; they come from the environment at wiring time.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{load_settings, load_settings_from_path, settings_path};
pub use types::{
    CapabilitySettings, FigaroSettings, GatewaySettings, LinkdSettings, LoggingSettings,
    ServerSettings,
};
