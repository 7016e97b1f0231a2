//! Domain types for project identity and configuration.

mod config;
mod dev_mode;
mod error;
mod id;
mod root;

pub use config::{CONFIG_FILE_NAME, DEFAULT_SEARCH_PATH, ProjectConfig};
pub use dev_mode::{DEV_MODE_ENV, DevMode};
pub use error::ProjectError;
pub use id::ProjectId;
pub use root::ProjectRoot;
