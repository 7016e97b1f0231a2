//! Error types for persisted agent record values.

use thiserror::Error;

/// Errors returned while constructing persisted record values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SyncDomainError {
    /// An entrypoint is not of the form `<module>:<identifier>`.
    #[error("malformed entrypoint '{0}', expected '<module>:<identifier>'")]
    MalformedEntrypoint(String),
}
