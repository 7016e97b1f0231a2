//! Metadata capture: turning a callable into an [`AgentDescriptor`].
//!
//! Capture works on anything that implements [`Introspect`]. The bare shape,
//! [`capture`], applies the default naming rules; the override shape builds
//! an [`AgentOverrides`] first and applies it to a callable later. Neither
//! shape consumes or alters the callable.

use super::{
    AgentDescriptor, AgentDomainError, AgentName, CallableRef, Signature, introspect,
};

/// Description used when neither an override nor documentation is available.
pub const NO_DESCRIPTION: &str = "No description";

/// Signature introspection capability of a callable.
pub trait Introspect {
    /// Returns the module and identifier of the callable.
    fn callable_ref(&self) -> &CallableRef;

    /// Returns the documentation text, if any.
    fn documentation(&self) -> Option<&str>;

    /// Returns the declared signature.
    fn signature(&self) -> &Signature;
}

/// Explicitly declared function: reference, documentation and signature.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    callable: CallableRef,
    doc: Option<String>,
    signature: Signature,
}

impl FunctionDef {
    /// Creates a function definition with no documentation and no parameters.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError`] when the module or identifier is blank.
    pub fn new(
        module: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Result<Self, AgentDomainError> {
        Ok(Self {
            callable: CallableRef::new(module, identifier)?,
            doc: None,
            signature: Signature::empty(),
        })
    }

    /// Attaches documentation text.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Replaces the signature.
    #[must_use]
    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = signature;
        self
    }
}

impl Introspect for FunctionDef {
    fn callable_ref(&self) -> &CallableRef {
        &self.callable
    }

    fn documentation(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    fn signature(&self) -> &Signature {
        &self.signature
    }
}

/// A native function paired with its declared definition.
///
/// The wrapped function stays directly callable through [`Declared::func`];
/// declaring it as an agent only reads the definition.
#[derive(Debug, Clone)]
pub struct Declared<F> {
    def: FunctionDef,
    func: F,
}

impl<F> Declared<F> {
    /// Pairs a function with its definition.
    #[must_use]
    pub const fn new(def: FunctionDef, func: F) -> Self {
        Self { def, func }
    }

    /// Returns the wrapped function.
    #[must_use]
    pub const fn func(&self) -> &F {
        &self.func
    }

    /// Returns the declared definition.
    #[must_use]
    pub const fn definition(&self) -> &FunctionDef {
        &self.def
    }

    /// Unwraps the function.
    #[must_use]
    pub fn into_inner(self) -> F {
        self.func
    }
}

impl<F> Introspect for Declared<F> {
    fn callable_ref(&self) -> &CallableRef {
        self.def.callable_ref()
    }

    fn documentation(&self) -> Option<&str> {
        self.def.documentation()
    }

    fn signature(&self) -> &Signature {
        self.def.signature()
    }
}

/// Optional overrides applied when declaring an agent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentOverrides {
    name: Option<String>,
    description: Option<String>,
    tags: Option<Vec<String>>,
}

impl AgentOverrides {
    /// Creates an empty set of overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the agent name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Overrides the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Applies the overrides to a callable, producing its descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::EmptyAgentName`] when the name override,
    /// or the identifier it would default from, is blank.
    pub fn apply<C>(&self, callable: &C) -> Result<AgentDescriptor, AgentDomainError>
    where
        C: Introspect + ?Sized,
    {
        let callable_ref = callable.callable_ref();
        let name = match &self.name {
            Some(name) => AgentName::new(name.as_str())?,
            None => AgentName::from_identifier(callable_ref.identifier())?,
        };
        let description = self
            .description
            .clone()
            .unwrap_or_else(|| describe(callable.documentation()));

        Ok(AgentDescriptor::new(
            name,
            callable_ref.clone(),
            description,
            self.tags.clone().unwrap_or_default(),
            introspect(callable.signature()),
        ))
    }
}

/// Captures a callable with the default naming and description rules.
///
/// # Errors
///
/// Returns [`AgentDomainError::EmptyAgentName`] when the identifier yields a
/// blank name.
pub fn capture<C>(callable: &C) -> Result<AgentDescriptor, AgentDomainError>
where
    C: Introspect + ?Sized,
{
    AgentOverrides::new().apply(callable)
}

fn describe(doc: Option<&str>) -> String {
    doc.and_then(|text| text.lines().map(str::trim).find(|line| !line.is_empty()))
        .map_or_else(|| NO_DESCRIPTION.to_owned(), ToOwned::to_owned)
}
