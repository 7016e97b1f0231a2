//! Adapter implementations for the discovery ports.

mod toml_module;

pub use toml_module::{MODULE_EXTENSION, TomlModuleLoader};
