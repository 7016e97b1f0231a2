//! Agent display name type.

use super::AgentDomainError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Display identifier of an agent and key of its registry entry.
///
/// Names are trimmed and must not be blank. No other character policy is
/// enforced: whatever a declaration resolves to is what gets registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentName(String);

impl AgentName {
    /// Creates an agent name.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::EmptyAgentName`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, AgentDomainError> {
        let normalized = value.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(AgentDomainError::EmptyAgentName);
        }
        Ok(Self(normalized))
    }

    /// Derives the default name of a callable: underscores become hyphens.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::EmptyAgentName`] when the identifier is
    /// blank.
    pub fn from_identifier(identifier: &str) -> Result<Self, AgentDomainError> {
        Self::new(identifier.replace('_', "-"))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AgentName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for AgentName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AgentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
