//! Unit tests for project identity and configuration.

mod config_tests;
mod identity_tests;
