//! Persisted invocation target of an agent.

use super::SyncDomainError;
use crate::agent::domain::CallableRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `<module>:<identifier>` string locating an agent's callable.
///
/// The module part is the unit identifier of the file that defined the
/// agent, so a process that loads that unit can resolve the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Entrypoint(String);

impl Entrypoint {
    /// Builds the entrypoint of a callable.
    #[must_use]
    pub fn for_callable(callable: &CallableRef) -> Self {
        Self(callable.to_string())
    }

    /// Parses a stored entrypoint.
    ///
    /// The split happens at the last `:`; both sides must be non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`SyncDomainError::MalformedEntrypoint`] otherwise.
    pub fn parse(value: impl Into<String>) -> Result<Self, SyncDomainError> {
        let raw = value.into();
        let well_formed = raw.rsplit_once(':').is_some_and(|(module, identifier)| {
            !module.trim().is_empty() && !identifier.trim().is_empty()
        });
        if well_formed {
            Ok(Self(raw))
        } else {
            Err(SyncDomainError::MalformedEntrypoint(raw))
        }
    }

    /// Returns the module part.
    #[must_use]
    pub fn module(&self) -> &str {
        self.0.rsplit_once(':').map_or("", |(module, _)| module)
    }

    /// Returns the identifier part.
    #[must_use]
    pub fn identifier(&self) -> &str {
        self.0.rsplit_once(':').map_or("", |(_, identifier)| identifier)
    }

    /// Returns the entrypoint as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Entrypoint {
    type Error = SyncDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Entrypoint> for String {
    fn from(entrypoint: Entrypoint) -> Self {
        entrypoint.0
    }
}

impl fmt::Display for Entrypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
