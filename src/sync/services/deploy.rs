//! Deploy service: discover a project's agents and reconcile storage.
//!
//! Provides [`DeployService`], which runs discovery for a project under that
//! project's lock and upserts one record per discovered agent in a single
//! batch.

use super::ProjectScopes;
use crate::agent::{
    AgentRegistry,
    domain::{AgentDescriptor, AgentName},
};
use crate::discovery::{
    ports::UnitLoader,
    services::{AgentDiscovery, DiscoveryError, DiscoveryReport},
};
use crate::project::{
    domain::{ProjectConfig, ProjectError, ProjectId, ProjectRoot},
    ports::{ConfigError, ProjectConfigSource},
};
use crate::sync::{
    domain::AgentRecord,
    ports::{AgentRecordRepository, AgentStoreError},
};
use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for deploy operations.
#[derive(Debug, Error)]
pub enum DeployError {
    /// The project root is invalid.
    #[error(transparent)]
    Project(#[from] ProjectError),
    /// Project configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Discovery could not run.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    /// Storage rejected the batch; nothing was written.
    #[error(transparent)]
    Store(#[from] AgentStoreError),
    /// The discovery task did not complete.
    #[error("discovery task failed: {0}")]
    Interrupted(#[source] tokio::task::JoinError),
}

/// Result type for deploy operations.
pub type DeployResult<T> = Result<T, DeployError>;

/// Outcome of one deploy.
#[derive(Debug, Clone)]
pub struct DeployReport {
    project_id: ProjectId,
    records: Vec<AgentRecord>,
    discovery: DiscoveryReport,
}

impl DeployReport {
    /// Returns the deployed project.
    #[must_use]
    pub const fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    /// Number of records written.
    #[must_use]
    pub fn deployed_count(&self) -> usize {
        self.records.len()
    }

    /// Records as stored, in registry order.
    #[must_use]
    pub fn records(&self) -> &[AgentRecord] {
        &self.records
    }

    /// The discovery pass behind this deploy.
    #[must_use]
    pub const fn discovery(&self) -> &DiscoveryReport {
        &self.discovery
    }
}

/// Deploys discovered agents into an [`AgentRecordRepository`].
pub struct DeployService<R, L, S, C>
where
    R: AgentRecordRepository,
    L: UnitLoader + 'static,
    S: ProjectConfigSource,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    loader: Arc<L>,
    config_source: Arc<S>,
    clock: Arc<C>,
    scopes: ProjectScopes,
}

impl<R, L, S, C> Clone for DeployService<R, L, S, C>
where
    R: AgentRecordRepository,
    L: UnitLoader + 'static,
    S: ProjectConfigSource,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            loader: Arc::clone(&self.loader),
            config_source: Arc::clone(&self.config_source),
            clock: Arc::clone(&self.clock),
            scopes: self.scopes.clone(),
        }
    }
}

impl<R, L, S, C> DeployService<R, L, S, C>
where
    R: AgentRecordRepository,
    L: UnitLoader + 'static,
    S: ProjectConfigSource,
    C: Clock + Send + Sync,
{
    /// Creates a deploy service with no project scopes yet.
    #[must_use]
    pub fn new(repository: Arc<R>, loader: Arc<L>, config_source: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            repository,
            loader,
            config_source,
            clock,
            scopes: ProjectScopes::new(),
        }
    }

    /// Returns the backing repository.
    #[must_use]
    pub const fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Loads the configuration of the project at `project_root`.
    ///
    /// # Errors
    ///
    /// Returns [`DeployError::Project`] for an invalid root or
    /// [`DeployError::Config`] when the configuration cannot be loaded.
    pub fn project_config(&self, project_root: &Utf8Path) -> DeployResult<ProjectConfig> {
        let root = ProjectRoot::new(project_root)?;
        Ok(self.config_source.load(&root)?)
    }

    /// Discovers the agents of the project at `project_root` and upserts a
    /// record for each of them.
    ///
    /// The project's registry is cleared and repopulated under the project's
    /// lock, so concurrent deploys of one project run one after another. When
    /// nothing is discovered storage is not touched.
    ///
    /// # Errors
    ///
    /// Returns [`DeployError`] when the root, configuration, discovery or
    /// storage fails. A storage failure leaves storage unchanged.
    pub async fn deploy(&self, project_root: &Utf8Path) -> DeployResult<DeployReport> {
        let root = ProjectRoot::new(project_root)?;
        let config = self.config_source.load(&root)?;
        let project_id = ProjectId::for_root(&root);

        let scope = self.scopes.scope(&project_id);
        let registry = scope.lock().await;
        registry.clear();

        let discovery = self
            .discover(registry.clone(), config.search_paths, root.into_path_buf())
            .await?;
        if discovery.discovered_count() == 0 {
            info!(project = %project_id, "no agents discovered, storage untouched");
            return Ok(DeployReport {
                project_id,
                records: Vec::new(),
                discovery,
            });
        }

        let records: Vec<AgentRecord> = registry
            .get_all()
            .values()
            .map(|descriptor| AgentRecord::new(project_id.clone(), descriptor, self.clock.as_ref()))
            .collect();
        let stored = self.repository.upsert_all(&records).await?;
        info!(
            project = %project_id,
            deployed = stored.len(),
            failed = discovery.failures().len(),
            "agents deployed"
        );

        Ok(DeployReport {
            project_id,
            records: stored,
            discovery,
        })
    }

    /// Returns a copy of the registry of `project_id`, read under the
    /// project's lock.
    ///
    /// Projects that have never been deployed yield an empty map.
    pub async fn registry_snapshot(
        &self,
        project_id: &ProjectId,
    ) -> IndexMap<AgentName, AgentDescriptor> {
        let Some(scope) = self.scopes.existing(project_id) else {
            return IndexMap::new();
        };
        scope.lock().await.get_all()
    }

    async fn discover(
        &self,
        registry: AgentRegistry,
        search_paths: Vec<Utf8PathBuf>,
        root: Utf8PathBuf,
    ) -> DeployResult<DiscoveryReport> {
        let loader = Arc::clone(&self.loader);
        debug!(root = %root, paths = search_paths.len(), "starting discovery");
        let report = tokio::task::spawn_blocking(move || {
            AgentDiscovery::new(loader, registry).discover(&search_paths, &root)
        })
        .await
        .map_err(DeployError::Interrupted)??;
        Ok(report)
    }
}
