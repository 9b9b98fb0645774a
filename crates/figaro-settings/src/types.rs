//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` for the JSON file
//! format and implement [`Default`] with production default values. Types
//! are marked `#[serde(default)]` so partial JSON is valid; missing fields
//! get their default during deserialization.

use serde::{Deserialize, Serialize};

/// Root settings type for the figaro orchestrator.
///
/// Loaded from `~/.figaro/settings.json` with defaults applied for missing
/// fields. Environment variables can override specific values.
///
/// # JSON Format
///
/// All field names are camelCase. Example:
///
/// ```json
/// {
///   "version": "0.1.0",
///   "server": { "port": 5000 },
///   "gateway": { "model": "gemini-2.5-flash" }
/// }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FigaroSettings {
    /// Settings schema version.
    pub version: String,
    /// Application name.
    pub name: String,
    /// HTTP server network settings.
    pub server: ServerSettings,
    /// Reasoning-gateway settings.
    pub gateway: GatewaySettings,
    /// Per-capability settings.
    pub capabilities: CapabilitySettings,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

impl Default for FigaroSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            name: "figaro".to_string(),
            server: ServerSettings::default(),
            gateway: GatewaySettings::default(),
            capabilities: CapabilitySettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

/// HTTP server network settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerSettings {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Reasoning-gateway settings.
///
/// The API key is deliberately absent: it is read from `GEMINI_API_KEY`
/// (or `GOOGLE_API_KEY`) at wiring time, never from the settings file.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GatewaySettings {
    /// Model identifier sent to the service.
    pub model: String,
    /// Override for the service base URL (testing, proxies).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Bounded wait for one round trip, in milliseconds.
    pub timeout_ms: u64,
    /// Cap on generated tokens per reply.
    pub max_output_tokens: u32,
    /// Sampling temperature; `None` uses the service default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            base_url: None,
            timeout_ms: 8000,
            max_output_tokens: 1024,
            temperature: None,
        }
    }
}

/// Per-capability settings.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CapabilitySettings {
    /// Alumni-search backend settings.
    pub linkd: LinkdSettings,
    /// Notebook file the `edit_jupyter` capability operates on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_path: Option<String>,
}

/// Alumni-search backend settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkdSettings {
    /// Base URL of the search API.
    pub base_url: String,
}

impl Default for LinkdSettings {
    fn default() -> Self {
        Self {
            base_url: "https://search.linkd.inc".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// Default log level when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
