//! Error types for project identity.

use thiserror::Error;

/// Errors returned while constructing project identity values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectError {
    /// The project root path is empty.
    #[error("project root must not be empty")]
    EmptyRoot,

    /// The current directory is needed to absolutize a relative root but
    /// cannot be determined.
    #[error("cannot resolve relative project root '{path}': {message}")]
    CurrentDir {
        /// The relative path as given.
        path: String,
        /// Why the current directory is unavailable.
        message: String,
    },

    /// A stored project identifier is not 16 lowercase hex characters.
    #[error("invalid project id: {0}")]
    InvalidProjectId(String),
}
