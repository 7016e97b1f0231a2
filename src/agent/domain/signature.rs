//! Declared callable signatures.
//!
//! A [`Signature`] is the introspectable shape of a callable: its ordered
//! parameters, their optional type annotations and defaults, and any
//! catch-all parameters. Structural problems are rejected here so that
//! schema extraction downstream never fails.

use super::AgentDomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

/// How a parameter binds arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// An ordinary named parameter.
    #[default]
    Positional,
    /// Catch-all for extra positional arguments.
    VarPositional,
    /// Catch-all for extra keyword arguments.
    VarKeyword,
}

impl ParamKind {
    /// Returns the catch-all marker for variadic kinds.
    #[must_use]
    pub const fn variadic(self) -> Option<Variadic> {
        match self {
            Self::Positional => None,
            Self::VarPositional => Some(Variadic::Positional),
            Self::VarKeyword => Some(Variadic::Keyword),
        }
    }
}

/// Marker carried by catch-all parameters in a parameter schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variadic {
    /// Extra positional arguments.
    Positional,
    /// Extra keyword arguments.
    Keyword,
}

impl Variadic {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positional => "positional",
            Self::Keyword => "keyword",
        }
    }
}

impl fmt::Display for Variadic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parameter of a declared signature.
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureParam {
    name: String,
    annotation: Option<String>,
    default: Option<Value>,
    kind: ParamKind,
    description: Option<String>,
}

impl SignatureParam {
    /// Creates a parameter without a default.
    #[must_use]
    pub fn required(name: impl Into<String>) -> Self {
        Self::with_kind(name, ParamKind::Positional)
    }

    /// Creates a parameter with a default value.
    #[must_use]
    pub fn with_default(name: impl Into<String>, default: Value) -> Self {
        Self {
            default: Some(default),
            ..Self::required(name)
        }
    }

    /// Creates a catch-all for extra positional arguments.
    #[must_use]
    pub fn var_positional(name: impl Into<String>) -> Self {
        Self::with_kind(name, ParamKind::VarPositional)
    }

    /// Creates a catch-all for extra keyword arguments.
    #[must_use]
    pub fn var_keyword(name: impl Into<String>) -> Self {
        Self::with_kind(name, ParamKind::VarKeyword)
    }

    fn with_kind(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into().trim().to_owned(),
            annotation: None,
            default: None,
            kind,
            description: None,
        }
    }

    /// Attaches a type annotation.
    #[must_use]
    pub fn annotated(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Attaches a parameter description.
    #[must_use]
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw type annotation, if declared.
    #[must_use]
    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    /// Returns the declared default, if any.
    #[must_use]
    pub const fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Returns the parameter kind.
    #[must_use]
    pub const fn kind(&self) -> ParamKind {
        self.kind
    }

    /// Returns the parameter description, if declared.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Ordered, validated parameter list of a callable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signature {
    params: Vec<SignatureParam>,
}

impl Signature {
    /// Creates a signature with no parameters.
    #[must_use]
    pub const fn empty() -> Self {
        Self { params: Vec::new() }
    }

    /// Creates a validated signature.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::EmptyParameterName`] for blank names,
    /// [`AgentDomainError::DuplicateParameter`] when names repeat,
    /// [`AgentDomainError::DuplicateVariadic`] when a catch-all kind appears
    /// twice, or [`AgentDomainError::VariadicDefault`] when a catch-all
    /// declares a default.
    pub fn new(params: impl IntoIterator<Item = SignatureParam>) -> Result<Self, AgentDomainError> {
        let params: Vec<SignatureParam> = params.into_iter().collect();
        let mut names = HashSet::new();
        let mut variadics = HashSet::new();

        for param in &params {
            if param.name.is_empty() {
                return Err(AgentDomainError::EmptyParameterName);
            }
            if !names.insert(param.name.as_str()) {
                return Err(AgentDomainError::DuplicateParameter(param.name.clone()));
            }
            if let Some(variadic) = param.kind.variadic() {
                if param.default.is_some() {
                    return Err(AgentDomainError::VariadicDefault(param.name.clone()));
                }
                if !variadics.insert(variadic) {
                    return Err(AgentDomainError::DuplicateVariadic(variadic));
                }
            }
        }

        Ok(Self { params })
    }

    /// Returns the parameters in declaration order.
    #[must_use]
    pub fn params(&self) -> &[SignatureParam] {
        &self.params
    }

    /// Returns the number of declared parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns whether the signature declares no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
