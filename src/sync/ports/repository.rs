//! Repository port for persisted agent records.

use crate::project::domain::ProjectId;
use crate::sync::domain::AgentRecord;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for agent record storage operations.
pub type AgentStoreResult<T> = Result<T, AgentStoreError>;

/// Agent record persistence contract.
///
/// Records are keyed by `(project_id, name)`. Upserting a key that already
/// exists keeps the stored identifier and creation time and replaces
/// everything else.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AgentRecordRepository: Send + Sync {
    /// Inserts or updates one record, returning the stored form.
    ///
    /// # Errors
    ///
    /// Returns [`AgentStoreError::Persistence`] when the store fails.
    async fn upsert(&self, record: &AgentRecord) -> AgentStoreResult<AgentRecord>;

    /// Inserts or updates a batch of records in a single transaction.
    ///
    /// Either every record is written or none is. Returns the stored forms in
    /// input order.
    ///
    /// # Errors
    ///
    /// Returns [`AgentStoreError::DuplicateInBatch`] when two records share a
    /// key, or [`AgentStoreError::Persistence`] when the store fails.
    async fn upsert_all(&self, records: &[AgentRecord]) -> AgentStoreResult<Vec<AgentRecord>>;

    /// Returns all records of a project ordered by name.
    async fn get_by_project(&self, project_id: &ProjectId) -> AgentStoreResult<Vec<AgentRecord>>;

    /// Finds a record by name within a project.
    ///
    /// Returns `None` when the project has no agent of that name.
    async fn get_by_name_and_project(
        &self,
        name: &str,
        project_id: &ProjectId,
    ) -> AgentStoreResult<Option<AgentRecord>>;

    /// Returns every stored record ordered by project and name.
    async fn get_all(&self) -> AgentStoreResult<Vec<AgentRecord>>;
}

/// Errors returned by agent record repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AgentStoreError {
    /// A batch contains the same `(project_id, name)` key twice.
    #[error("duplicate agent '{name}' in batch for project {project_id}")]
    DuplicateInBatch {
        /// Project of the duplicated key.
        project_id: ProjectId,
        /// Name of the duplicated key.
        name: String,
    },

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AgentStoreError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
