//! Agent descriptor and callable reference types.

use super::{AgentDomainError, AgentName, ParameterSchema};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Locates the callable behind an agent: the module that defines it and the
/// function identifier inside that module.
///
/// Renders as `<module>:<identifier>`, the entrypoint form persisted for
/// out-of-process invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallableRef {
    module: String,
    identifier: String,
}

impl CallableRef {
    /// Creates a callable reference.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::EmptyModule`] or
    /// [`AgentDomainError::EmptyIdentifier`] when either part is blank, and
    /// [`AgentDomainError::InvalidIdentifier`] when the identifier contains
    /// a `:` or whitespace.
    pub fn new(
        module: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Result<Self, AgentDomainError> {
        let module = module.into().trim().to_owned();
        let identifier = identifier.into().trim().to_owned();
        if module.is_empty() {
            return Err(AgentDomainError::EmptyModule);
        }
        if identifier.is_empty() {
            return Err(AgentDomainError::EmptyIdentifier);
        }
        if identifier.contains(|ch: char| ch == ':' || ch.is_whitespace()) {
            return Err(AgentDomainError::InvalidIdentifier(identifier));
        }
        Ok(Self { module, identifier })
    }

    /// Returns the defining module path.
    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Returns the function identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl fmt::Display for CallableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.module, self.identifier)
    }
}

/// In-memory description of a declared agent.
///
/// Created once per declaration and never mutated; re-declaring the same
/// name produces a new descriptor that replaces the old registry entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentDescriptor {
    name: AgentName,
    callable: CallableRef,
    description: String,
    tags: Vec<String>,
    parameters: ParameterSchema,
}

impl AgentDescriptor {
    pub(super) const fn new(
        name: AgentName,
        callable: CallableRef,
        description: String,
        tags: Vec<String>,
        parameters: ParameterSchema,
    ) -> Self {
        Self {
            name,
            callable,
            description,
            tags,
            parameters,
        }
    }

    /// Returns the agent name.
    #[must_use]
    pub const fn name(&self) -> &AgentName {
        &self.name
    }

    /// Returns the reference to the underlying callable.
    #[must_use]
    pub const fn callable(&self) -> &CallableRef {
        &self.callable
    }

    /// Returns the agent description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the tags in declaration order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the parameter schema.
    #[must_use]
    pub const fn parameters(&self) -> &ParameterSchema {
        &self.parameters
    }
}
