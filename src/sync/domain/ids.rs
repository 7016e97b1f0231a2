//! Storage identity of agent records.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Storage identity of an agent record.
///
/// Generated once, when an agent name first appears in a project. Later
/// deploys of the same `(project, name)` pair keep it, so it outlives
/// changes to the agent's description, entrypoint and parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentRecordId(Uuid);

impl AgentRecordId {
    /// Generates the identity of a newly stored record.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Restores the identity of a stored record.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the UUID stored in the `id` column.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for AgentRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}
