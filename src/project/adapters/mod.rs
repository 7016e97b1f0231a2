//! Configuration source adapters.

mod static_source;
mod toml_file;

pub use static_source::StaticConfigSource;
pub use crate::project::domain::CONFIG_FILE_NAME;
pub use toml_file::TomlConfigFile;
