//! Error types for agent declarations and callable signatures.

use super::Variadic;
use thiserror::Error;

/// Errors returned while constructing agent domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AgentDomainError {
    /// The agent name is empty after trimming.
    #[error("agent name must not be empty")]
    EmptyAgentName,

    /// The callable identifier is empty after trimming.
    #[error("callable identifier must not be empty")]
    EmptyIdentifier,

    /// The callable identifier contains a `:` or whitespace.
    #[error("callable identifier '{0}' must not contain ':' or whitespace")]
    InvalidIdentifier(String),

    /// The module path of a callable is empty after trimming.
    #[error("callable module path must not be empty")]
    EmptyModule,

    /// A signature parameter has a blank name.
    #[error("parameter name must not be empty")]
    EmptyParameterName,

    /// Two parameters in one signature share a name.
    #[error("duplicate parameter '{0}' in signature")]
    DuplicateParameter(String),

    /// A signature declares the same catch-all kind twice.
    #[error("signature declares more than one {0} catch-all parameter")]
    DuplicateVariadic(Variadic),

    /// A catch-all parameter declares a default value.
    #[error("catch-all parameter '{0}' cannot declare a default")]
    VariadicDefault(String),
}
