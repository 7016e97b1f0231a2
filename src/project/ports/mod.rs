//! Port contracts for project configuration.

mod config_source;

pub use config_source::{ConfigError, ConfigResult, ProjectConfigSource};

#[cfg(test)]
pub use config_source::MockProjectConfigSource;
