//! Agent module host for declarative TOML units.
//!
//! A module defines functions with explicit signatures and declares agents
//! over them:
//!
//! ```toml
//! [[function]]
//! name = "summarize_text"
//! doc = "Summarize a document."
//!
//! [[function.param]]
//! name = "text"
//! type = "str"
//!
//! [[function.param]]
//! name = "max_words"
//! type = "int"
//! default = 120
//!
//! [[agent]]
//! function = "summarize_text"
//! tags = ["nlp"]
//! ```
//!
//! Each unit is evaluated in its own namespace. A later `[[function]]` with
//! the same name rebinds the earlier one.

use crate::agent::domain::{
    AgentDescriptor, AgentDomainError, AgentOverrides, FunctionDef, Introspect, ParamKind, Signature,
    SignatureParam,
};
use crate::discovery::{
    domain::{SourceUnit, UnitExports, UnitId},
    ports::{UnitLoadError, UnitLoadResult, UnitLoader},
};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// File extension of agent modules.
pub const MODULE_EXTENSION: &str = "toml";

/// Evaluates `*.toml` agent modules.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlModuleLoader;

impl TomlModuleLoader {
    /// Creates a module loader.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl UnitLoader for TomlModuleLoader {
    fn extension(&self) -> &str {
        MODULE_EXTENSION
    }

    fn load(&self, unit: &SourceUnit) -> UnitLoadResult<UnitExports> {
        let module: ModuleFile =
            toml::from_str(unit.source()).map_err(|err| UnitLoadError::Syntax {
                unit: unit.id().clone(),
                message: err.message().to_owned(),
            })?;

        let mut namespace = HashMap::new();
        for function in module.functions {
            let def = function.into_definition(unit.id())?;
            namespace.insert(def.callable_ref().identifier().to_owned(), def);
        }

        let agents = module
            .agents
            .into_iter()
            .map(|agent| agent.declare(unit.id(), &namespace))
            .collect::<UnitLoadResult<Vec<_>>>()?;

        Ok(UnitExports::new(agents))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModuleFile {
    #[serde(default, rename = "function")]
    functions: Vec<FunctionDecl>,
    #[serde(default, rename = "agent")]
    agents: Vec<AgentDecl>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FunctionDecl {
    name: String,
    #[serde(default)]
    doc: Option<String>,
    #[serde(default, rename = "param")]
    params: Vec<ParamDecl>,
}

impl FunctionDecl {
    fn into_definition(self, unit: &UnitId) -> UnitLoadResult<FunctionDef> {
        let declaration_error = |source: AgentDomainError| UnitLoadError::Declaration {
            unit: unit.clone(),
            source,
        };

        let params = self
            .params
            .into_iter()
            .map(ParamDecl::into_param)
            .collect::<Result<Vec<_>, _>>()
            .map_err(declaration_error)?;
        let signature = Signature::new(params).map_err(declaration_error)?;
        let mut def = FunctionDef::new(unit.as_str(), self.name)
            .map_err(declaration_error)?
            .with_signature(signature);
        if let Some(doc) = self.doc {
            def = def.with_doc(doc);
        }
        Ok(def)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ParamDecl {
    name: String,
    #[serde(default, rename = "type")]
    annotation: Option<String>,
    #[serde(default)]
    default: Option<toml::Value>,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    kind: ParamKind,
    #[serde(default)]
    description: Option<String>,
}

impl ParamDecl {
    fn into_param(self) -> Result<SignatureParam, AgentDomainError> {
        if self.kind.variadic().is_some() && (self.default.is_some() || self.optional) {
            return Err(AgentDomainError::VariadicDefault(self.name));
        }
        let mut param = match self.kind {
            ParamKind::VarPositional => SignatureParam::var_positional(self.name),
            ParamKind::VarKeyword => SignatureParam::var_keyword(self.name),
            ParamKind::Positional => match (self.default, self.optional) {
                (Some(value), _) => SignatureParam::with_default(self.name, toml_to_json(value)),
                (None, true) => SignatureParam::with_default(self.name, Value::Null),
                (None, false) => SignatureParam::required(self.name),
            },
        };
        if let Some(annotation) = self.annotation {
            param = param.annotated(annotation);
        }
        if let Some(description) = self.description {
            param = param.described(description);
        }
        Ok(param)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AgentDecl {
    function: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

impl AgentDecl {
    fn declare(
        self,
        unit: &UnitId,
        namespace: &HashMap<String, FunctionDef>,
    ) -> UnitLoadResult<AgentDescriptor> {
        let def = namespace
            .get(&self.function)
            .ok_or_else(|| UnitLoadError::UndefinedFunction {
                unit: unit.clone(),
                function: self.function.clone(),
            })?;

        let mut overrides = AgentOverrides::new();
        if let Some(name) = self.name {
            overrides = overrides.name(name);
        }
        if let Some(description) = self.description {
            overrides = overrides.description(description);
        }
        if let Some(tags) = self.tags {
            overrides = overrides.tags(tags);
        }

        overrides
            .apply(def)
            .map_err(|source| UnitLoadError::Declaration {
                unit: unit.clone(),
                source,
            })
    }
}

/// Converts a TOML value into its JSON counterpart.
///
/// Datetimes become their RFC 3339 string form; non-finite floats become
/// `null`.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(text) => Value::String(text),
        toml::Value::Integer(number) => Value::from(number),
        toml::Value::Float(number) => Value::from(number),
        toml::Value::Boolean(flag) => Value::Bool(flag),
        toml::Value::Datetime(datetime) => Value::String(datetime.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, item)| (key, toml_to_json(item)))
                .collect(),
        ),
    }
}
