//! `agentry.toml` configuration source.
//!
//! ```toml
//! [agents]
//! search_paths = ["agents", "extra/agents"]
//! auto_discover = true
//! watch = false
//! ```
//!
//! Missing file, missing table and missing keys all fall back to defaults.

use crate::project::{
    domain::{CONFIG_FILE_NAME, ProjectConfig, ProjectRoot},
    ports::{ConfigError, ConfigResult, ProjectConfigSource},
};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;
use std::io::ErrorKind;
use std::sync::Arc;
use tracing::debug;

/// Reads project configuration from [`CONFIG_FILE_NAME`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlConfigFile;

impl TomlConfigFile {
    /// Creates a file-backed configuration source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    agents: ProjectConfig,
}

impl ProjectConfigSource for TomlConfigFile {
    fn load(&self, root: &ProjectRoot) -> ConfigResult<ProjectConfig> {
        let path = root.as_path().join(CONFIG_FILE_NAME);
        let read = Dir::open_ambient_dir(root.as_path(), ambient_authority())
            .and_then(|dir| dir.read_to_string(CONFIG_FILE_NAME));
        let contents = match read {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path, "no project configuration file, using defaults");
                return Ok(ProjectConfig::default());
            }
            Err(err) => {
                return Err(ConfigError::Read {
                    path,
                    source: Arc::new(err),
                });
            }
        };

        let file: ConfigFile = toml::from_str(&contents).map_err(|err| ConfigError::Parse {
            path: path.clone(),
            message: err.message().to_owned(),
        })?;
        Ok(file.agents)
    }
}
