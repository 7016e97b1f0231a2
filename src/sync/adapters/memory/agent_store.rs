//! In-memory repository for agent records.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::agent::domain::AgentName;
use crate::project::domain::ProjectId;
use crate::sync::{
    domain::AgentRecord,
    ports::{AgentRecordRepository, AgentStoreError, AgentStoreResult},
};

type RecordKey = (ProjectId, AgentName);

/// Thread-safe in-memory agent record repository.
///
/// Batches are applied by building the next state aside and swapping it in,
/// so a rejected batch leaves the store untouched.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAgentStore {
    state: Arc<RwLock<BTreeMap<RecordKey, AgentRecord>>>,
}

impl InMemoryAgentStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn key_of(record: &AgentRecord) -> RecordKey {
    (record.project_id().clone(), record.name().clone())
}

fn merge(records: &mut BTreeMap<RecordKey, AgentRecord>, incoming: &AgentRecord) -> AgentRecord {
    let key = key_of(incoming);
    let stored = records.get(&key).map_or_else(
        || incoming.clone(),
        |existing| existing.refreshed_with(incoming),
    );
    records.insert(key, stored.clone());
    stored
}

#[async_trait]
impl AgentRecordRepository for InMemoryAgentStore {
    async fn upsert(&self, record: &AgentRecord) -> AgentStoreResult<AgentRecord> {
        let mut state = self.state.write();
        Ok(merge(&mut state, record))
    }

    async fn upsert_all(&self, records: &[AgentRecord]) -> AgentStoreResult<Vec<AgentRecord>> {
        let mut state = self.state.write();

        let mut next = state.clone();
        let mut seen = HashSet::new();
        let mut stored = Vec::with_capacity(records.len());
        for record in records {
            if !seen.insert(key_of(record)) {
                return Err(AgentStoreError::DuplicateInBatch {
                    project_id: record.project_id().clone(),
                    name: record.name().to_string(),
                });
            }
            stored.push(merge(&mut next, record));
        }

        *state = next;
        Ok(stored)
    }

    async fn get_by_project(&self, project_id: &ProjectId) -> AgentStoreResult<Vec<AgentRecord>> {
        let state = self.state.read();
        Ok(state
            .iter()
            .filter(|((project, _), _)| project == project_id)
            .map(|(_, record)| record.clone())
            .collect())
    }

    async fn get_by_name_and_project(
        &self,
        name: &str,
        project_id: &ProjectId,
    ) -> AgentStoreResult<Option<AgentRecord>> {
        let Ok(agent_name) = AgentName::new(name) else {
            return Ok(None);
        };
        let state = self.state.read();
        Ok(state.get(&(project_id.clone(), agent_name)).cloned())
    }

    async fn get_all(&self) -> AgentStoreResult<Vec<AgentRecord>> {
        let state = self.state.read();
        Ok(state.values().cloned().collect())
    }
}
