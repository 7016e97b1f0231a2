//! Parameter schema extraction.

use super::{Signature, SignatureParam, Variadic, resolve_type_label};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema entry describing one parameter of an agent.
///
/// `required` is true exactly when no default was declared, except for
/// catch-all parameters which carry a [`Variadic`] marker and are never
/// required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    name: String,
    #[serde(rename = "type")]
    type_label: String,
    required: bool,
    default: Option<Value>,
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    variadic: Option<Variadic>,
}

impl ParameterDescriptor {
    fn from_param(param: &SignatureParam) -> Self {
        let variadic = param.kind().variadic();
        let default = param.default().cloned();
        Self {
            name: param.name().to_owned(),
            type_label: resolve_type_label(param.annotation()),
            required: variadic.is_none() && default.is_none(),
            default,
            description: param.description().map(ToOwned::to_owned),
            variadic,
        }
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the resolved type label.
    #[must_use]
    pub fn type_label(&self) -> &str {
        &self.type_label
    }

    /// Returns whether callers must supply this parameter.
    #[must_use]
    pub const fn required(&self) -> bool {
        self.required
    }

    /// Returns the declared default, verbatim.
    #[must_use]
    pub const fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Returns the parameter description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the catch-all marker, if this is a variadic parameter.
    #[must_use]
    pub const fn variadic(&self) -> Option<Variadic> {
        self.variadic
    }
}

/// Ordered mapping from parameter name to its descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSchema(IndexMap<String, ParameterDescriptor>);

impl ParameterSchema {
    /// Looks up a parameter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParameterDescriptor> {
        self.0.get(name)
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the schema is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over descriptors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.0.values()
    }

    /// Returns the parameter names in declaration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }
}

/// Derives the parameter schema of a signature.
///
/// Pure and infallible: unresolvable annotations degrade to
/// [`super::ANY_TYPE`].
#[must_use]
pub fn introspect(signature: &Signature) -> ParameterSchema {
    ParameterSchema(
        signature
            .params()
            .iter()
            .map(|param| (param.name().to_owned(), ParameterDescriptor::from_param(param)))
            .collect(),
    )
}
