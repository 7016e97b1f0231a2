//! Diesel row models for agent record persistence.

use super::schema::agents;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for agent records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = agents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AgentRow {
    /// Record identifier.
    pub id: uuid::Uuid,
    /// Owning project identifier.
    pub project_id: String,
    /// Agent name.
    pub name: String,
    /// Agent description.
    pub description: String,
    /// Invocation target.
    pub entrypoint: String,
    /// Tags JSON payload.
    pub tags: Value,
    /// Parameter schema JSON payload.
    pub parameters: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for agent records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = agents)]
pub struct NewAgentRow {
    /// Record identifier.
    pub id: uuid::Uuid,
    /// Owning project identifier.
    pub project_id: String,
    /// Agent name.
    pub name: String,
    /// Agent description.
    pub description: String,
    /// Invocation target.
    pub entrypoint: String,
    /// Tags JSON payload.
    pub tags: Value,
    /// Parameter schema JSON payload.
    pub parameters: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
