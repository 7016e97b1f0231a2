//! Fixed configuration source.

use crate::project::{
    domain::{ProjectConfig, ProjectRoot},
    ports::{ConfigResult, ProjectConfigSource},
};

/// Returns the same configuration for every project.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigSource {
    config: ProjectConfig,
}

impl StaticConfigSource {
    /// Creates a source that always yields `config`.
    #[must_use]
    pub const fn new(config: ProjectConfig) -> Self {
        Self { config }
    }
}

impl ProjectConfigSource for StaticConfigSource {
    fn load(&self, _root: &ProjectRoot) -> ConfigResult<ProjectConfig> {
        Ok(self.config.clone())
    }
}
