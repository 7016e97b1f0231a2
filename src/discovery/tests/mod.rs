//! Unit tests for unit identity, the module host and the discovery service.

mod toml_module_tests;
