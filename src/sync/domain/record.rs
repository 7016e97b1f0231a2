//! Persisted agent record aggregate.

use super::{AgentRecordId, Entrypoint};
use crate::agent::domain::{AgentDescriptor, AgentName, ParameterSchema};
use crate::project::domain::ProjectId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Durable form of a discovered agent, unique per `(project_id, name)`.
///
/// Serializes as `{id, project_id, name, description, entrypoint, tags,
/// parameters, created_at, updated_at}` with RFC 3339 timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    id: AgentRecordId,
    project_id: ProjectId,
    name: AgentName,
    description: String,
    entrypoint: Entrypoint,
    tags: Vec<String>,
    parameters: ParameterSchema,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted agent record.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedAgentData {
    /// Persisted record identifier.
    pub id: AgentRecordId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Agent name.
    pub name: AgentName,
    /// Agent description.
    pub description: String,
    /// Invocation target.
    pub entrypoint: Entrypoint,
    /// Agent tags.
    pub tags: Vec<String>,
    /// Parameter schema.
    pub parameters: ParameterSchema,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl AgentRecord {
    /// Creates a fresh record for a discovered agent.
    #[must_use]
    pub fn new(project_id: ProjectId, descriptor: &AgentDescriptor, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: AgentRecordId::generate(),
            project_id,
            name: descriptor.name().clone(),
            description: descriptor.description().to_owned(),
            entrypoint: Entrypoint::for_callable(descriptor.callable()),
            tags: descriptor.tags().to_vec(),
            parameters: descriptor.parameters().clone(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAgentData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            name: data.name,
            description: data.description,
            entrypoint: data.entrypoint,
            tags: data.tags,
            parameters: data.parameters,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Merges `incoming` into this stored record.
    ///
    /// Identity and creation time are kept; content and `updated_at` come
    /// from `incoming`.
    #[must_use]
    pub fn refreshed_with(&self, incoming: &Self) -> Self {
        Self {
            id: self.id,
            project_id: self.project_id.clone(),
            name: self.name.clone(),
            created_at: self.created_at,
            ..incoming.clone()
        }
    }

    /// Returns `true` when both records carry the same agent metadata,
    /// ignoring identity and timestamps.
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        self.project_id == other.project_id
            && self.name == other.name
            && self.description == other.description
            && self.entrypoint == other.entrypoint
            && self.tags == other.tags
            && self.parameters == other.parameters
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> AgentRecordId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    /// Returns the agent name.
    #[must_use]
    pub const fn name(&self) -> &AgentName {
        &self.name
    }

    /// Returns the agent description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the invocation target.
    #[must_use]
    pub const fn entrypoint(&self) -> &Entrypoint {
        &self.entrypoint
    }

    /// Returns the agent tags.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the parameter schema.
    #[must_use]
    pub const fn parameters(&self) -> &ParameterSchema {
        &self.parameters
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
