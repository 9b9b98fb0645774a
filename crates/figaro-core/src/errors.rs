//! Registry errors.

use thiserror::Error;

/// Errors raised by capability-registry operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A capability with this name is already registered.
    ///
    /// Registration never overwrites: the declared surface is a fixed
    /// contract with the reasoning service, so a name collision is a
    /// wiring bug.
    #[error("capability '{name}' is already registered")]
    DuplicateCapability {
        /// The conflicting name.
        name: String,
    },

    /// No capability with this name is registered.
    #[error("unknown capability '{name}'")]
    UnknownCapability {
        /// The requested name.
        name: String,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
