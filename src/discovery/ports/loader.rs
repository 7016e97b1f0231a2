//! Loadable-unit port.

use crate::agent::domain::AgentDomainError;
use crate::discovery::domain::{SourceUnit, UnitExports, UnitId};
use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Result type for unit loading.
pub type UnitLoadResult<T> = Result<T, UnitLoadError>;

/// Evaluates source units in isolation and reports what they declare.
///
/// Each call receives a fresh unit and must not observe state left behind by
/// earlier calls. Failures are returned, never raised past the caller.
pub trait UnitLoader: Send + Sync {
    /// File extension, without the dot, of the units this loader understands.
    fn extension(&self) -> &str;

    /// Evaluates a unit and returns the agent declarations it made.
    ///
    /// # Errors
    ///
    /// Returns [`UnitLoadError`] when the unit cannot be parsed or evaluated.
    fn load(&self, unit: &SourceUnit) -> UnitLoadResult<UnitExports>;
}

/// Reasons a single unit failed to load.
#[derive(Debug, Clone, Error)]
pub enum UnitLoadError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Project-relative path of the file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The unit is not well formed.
    #[error("syntax error in {unit}: {message}")]
    Syntax {
        /// Unit identifier.
        unit: UnitId,
        /// Parser diagnostic.
        message: String,
    },

    /// An agent declaration refers to a function the unit does not define.
    #[error("{unit} declares an agent for undefined function '{function}'")]
    UndefinedFunction {
        /// Unit identifier.
        unit: UnitId,
        /// Referenced function identifier.
        function: String,
    },

    /// A function or agent declaration is invalid.
    #[error("invalid declaration in {unit}: {source}")]
    Declaration {
        /// Unit identifier.
        unit: UnitId,
        /// Domain validation failure.
        #[source]
        source: AgentDomainError,
    },

    /// Evaluation panicked.
    #[error("{unit} panicked during evaluation: {message}")]
    Panicked {
        /// Unit identifier.
        unit: UnitId,
        /// Panic payload, when it was a string.
        message: String,
    },

    /// Host-specific evaluation failure.
    #[error("failed to evaluate {unit}: {source}")]
    Runtime {
        /// Unit identifier.
        unit: UnitId,
        /// Underlying error.
        #[source]
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl UnitLoadError {
    /// Wraps a host-specific evaluation error.
    pub fn runtime(unit: UnitId, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime {
            unit,
            source: Arc::new(err),
        }
    }
}
