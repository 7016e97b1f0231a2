//! Project identity and project-level configuration.
//!
//! A project is a directory tree. Its normalized root path yields a stable
//! [`domain::ProjectId`], and its configuration names the search paths that
//! discovery scans.

pub mod adapters;
pub mod domain;
pub mod ports;

pub use domain::{DevMode, ProjectConfig, ProjectId, ProjectRoot};

#[cfg(test)]
mod tests;
