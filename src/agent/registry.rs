//! In-process registry of declared agents.

use crate::agent::domain::{
    AgentDescriptor, AgentDomainError, AgentName, AgentOverrides, Introspect, capture,
};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// Keyed store of agent descriptors, last write wins.
///
/// Cloning yields another handle to the same store. Registries are owned by
/// whichever context drives discovery; there is no process-global instance.
#[derive(Debug, Clone, Default)]
pub struct AgentRegistry {
    entries: Arc<RwLock<IndexMap<AgentName, AgentDescriptor>>>,
}

impl AgentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a descriptor, replacing any entry with the same name.
    pub fn register(&self, descriptor: AgentDescriptor) {
        let mut entries = self.entries.write();
        if entries.contains_key(descriptor.name()) {
            tracing::debug!(agent = %descriptor.name(), "replacing registered agent");
        }
        entries.insert(descriptor.name().clone(), descriptor);
    }

    /// Returns the descriptor registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<AgentDescriptor> {
        self.entries.read().get(name).cloned()
    }

    /// Returns a copy of every entry in registration order.
    ///
    /// Later mutations of the registry are not visible through the copy.
    #[must_use]
    pub fn get_all(&self) -> IndexMap<AgentName, AgentDescriptor> {
        self.entries.read().clone()
    }

    /// Returns the registered names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<AgentName> {
        self.entries.read().keys().cloned().collect()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Captures a callable with default metadata and registers it.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError`] when the callable cannot be captured.
    pub fn declare<C>(&self, callable: &C) -> Result<AgentDescriptor, AgentDomainError>
    where
        C: Introspect + ?Sized,
    {
        let descriptor = capture(callable)?;
        self.register(descriptor.clone());
        Ok(descriptor)
    }

    /// Captures a callable with overrides and registers it.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError`] when the overrides or callable are invalid.
    pub fn declare_with<C>(
        &self,
        overrides: &AgentOverrides,
        callable: &C,
    ) -> Result<AgentDescriptor, AgentDomainError>
    where
        C: Introspect + ?Sized,
    {
        let descriptor = overrides.apply(callable)?;
        self.register(descriptor.clone());
        Ok(descriptor)
    }
}
