//! Project configuration source port.

use crate::project::domain::{ProjectConfig, ProjectRoot};
use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Supplies the configuration of a project.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectConfigSource: Send + Sync {
    /// Loads the configuration of the project at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration exists but cannot be read
    /// or parsed.
    fn load(&self, root: &ProjectRoot) -> ConfigResult<ProjectConfig>;
}

/// Errors returned while loading project configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The configuration file is malformed.
    #[error("invalid configuration in {path}: {message}")]
    Parse {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Parser diagnostic.
        message: String,
    },
}
