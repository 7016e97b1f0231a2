//! Project-level agent configuration.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Search path used when a project configures none.
pub const DEFAULT_SEARCH_PATH: &str = "agents";

/// Name of the configuration file at the project root.
pub const CONFIG_FILE_NAME: &str = "agentry.toml";

/// Agent-related settings of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Directories, relative to the project root, scanned in order.
    pub search_paths: Vec<Utf8PathBuf>,
    /// Whether agents are discovered and deployed on startup.
    pub auto_discover: bool,
    /// Whether search paths are watched for changes.
    pub watch: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            search_paths: vec![Utf8PathBuf::from(DEFAULT_SEARCH_PATH)],
            auto_discover: true,
            watch: false,
        }
    }
}

impl ProjectConfig {
    /// Replaces the search paths.
    #[must_use]
    pub fn with_search_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Utf8PathBuf>,
    {
        self.search_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Sets whether agents are deployed on startup.
    #[must_use]
    pub const fn with_auto_discover(mut self, auto_discover: bool) -> Self {
        self.auto_discover = auto_discover;
        self
    }
}
