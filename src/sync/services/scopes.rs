//! Per-project registries and their locks.

use crate::agent::AgentRegistry;
use crate::project::domain::ProjectId;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::MutexGuard;

/// A project's registry behind the lock that serializes its deploys.
#[derive(Debug, Default)]
pub struct ProjectScope {
    registry: tokio::sync::Mutex<AgentRegistry>,
}

impl ProjectScope {
    /// Waits for exclusive access to the project's registry.
    pub async fn lock(&self) -> MutexGuard<'_, AgentRegistry> {
        self.registry.lock().await
    }
}

/// Lazily created [`ProjectScope`]s keyed by project.
///
/// Distinct projects never share a registry or a lock.
#[derive(Debug, Clone, Default)]
pub struct ProjectScopes {
    scopes: Arc<Mutex<HashMap<ProjectId, Arc<ProjectScope>>>>,
}

impl ProjectScopes {
    /// Creates an empty scope table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the scope of `project_id`, creating it on first use.
    #[must_use]
    pub fn scope(&self, project_id: &ProjectId) -> Arc<ProjectScope> {
        let mut scopes = self.scopes.lock();
        Arc::clone(scopes.entry(project_id.clone()).or_default())
    }

    /// Returns the scope of `project_id` if one exists.
    #[must_use]
    pub fn existing(&self, project_id: &ProjectId) -> Option<Arc<ProjectScope>> {
        self.scopes.lock().get(project_id).cloned()
    }
}
