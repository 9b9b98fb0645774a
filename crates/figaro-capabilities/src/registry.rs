//! Capability registry — central index of all registered capabilities.
//!
//! The [`CapabilityRegistry`] maps capability names to their [`Capability`]
//! implementations while preserving registration order. The agent registers
//! capabilities at startup and the runtime queries the registry to interpret
//! selections, dispatch invocations, and build the declared schema.

use std::collections::HashMap;
use std::sync::Arc;

use figaro_core::capability::CapabilitySpec;
use figaro_core::errors::RegistryError;
use tracing::debug;

use crate::traits::Capability;

/// Central registry mapping capability names to their implementations.
///
/// Registration order is preserved: the schema advertised to the reasoning
/// service lists capabilities exactly in the order they were registered.
pub struct CapabilityRegistry {
    entries: Vec<Arc<dyn Capability>>,
    index: HashMap<String, usize>,
}

impl CapabilityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a capability.
    ///
    /// Fails if a capability with the same name is already registered; the
    /// existing entry is left untouched.
    pub fn register(&mut self, capability: Arc<dyn Capability>) -> Result<(), RegistryError> {
        let name = capability.name().to_owned();
        if self.index.contains_key(&name) {
            return Err(RegistryError::DuplicateCapability { name });
        }
        debug!(capability = %name, "capability registered");
        let _ = self.index.insert(name, self.entries.len());
        self.entries.push(capability);
        Ok(())
    }

    /// Look up a capability by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn Capability>> {
        self.index.get(name).map(|&i| Arc::clone(&self.entries[i]))
    }

    /// Look up a capability by name, erroring when it is not registered.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Capability>, RegistryError> {
        self.get(name).ok_or_else(|| RegistryError::UnknownCapability {
            name: name.to_owned(),
        })
    }

    /// Return every registered capability in registration order.
    #[must_use]
    pub fn all(&self) -> Vec<Arc<dyn Capability>> {
        self.entries.iter().map(Arc::clone).collect()
    }

    /// Return all capability schemas in registration order.
    #[must_use]
    pub fn specs(&self) -> Vec<CapabilitySpec> {
        self.entries.iter().map(|c| c.spec()).collect()
    }

    /// Return all capability names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|c| c.name().to_owned()).collect()
    }

    /// Number of registered capabilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a capability with the given name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }
}

impl Default for CapabilityRegistry {
    fn default() -> Self {
        Self::new()
    }
}
