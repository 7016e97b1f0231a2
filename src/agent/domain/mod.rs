//! Domain model for agent declarations.
//!
//! Covers the three pure pieces of agent metadata: signature introspection
//! into a parameter schema, capture of a callable into an
//! [`AgentDescriptor`], and the value types they share. No I/O happens here.

mod capture;
mod descriptor;
mod error;
mod name;
mod parameter;
mod signature;
mod type_label;

pub use capture::{AgentOverrides, Declared, FunctionDef, Introspect, NO_DESCRIPTION, capture};
pub use descriptor::{AgentDescriptor, CallableRef};
pub use error::AgentDomainError;
pub use name::AgentName;
pub use parameter::{ParameterDescriptor, ParameterSchema, introspect};
pub use signature::{ParamKind, Signature, SignatureParam, Variadic};
pub use type_label::{ANY_TYPE, MAX_NESTING_DEPTH, resolve_type_label};
