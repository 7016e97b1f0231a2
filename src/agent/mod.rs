//! Agent declaration, introspection and registration.
//!
//! - Domain types and metadata capture in [`domain`]
//! - The in-process keyed store in [`registry`]

pub mod domain;
pub mod registry;

pub use registry::AgentRegistry;

#[cfg(test)]
mod tests;
