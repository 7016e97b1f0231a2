//! Agent discovery across project search paths.
//!
//! Source files beneath a project's search paths are evaluated as isolated
//! units by a [`ports::UnitLoader`]; the agents they declare land in an
//! [`crate::agent::AgentRegistry`].

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

pub use services::{AgentDiscovery, DiscoveryReport};

#[cfg(test)]
mod tests;
