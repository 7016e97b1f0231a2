//! Agentry: discovery and deployment of declared agents.
//!
//! Projects declare agents as functions in agent modules. This crate finds
//! those modules beneath a project's search paths, captures each agent's
//! metadata and parameter schema, and reconciles the result with persistent
//! storage.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types and rules with no infrastructure dependencies
//! - **Ports**: Trait interfaces for loaders, configuration and storage
//! - **Adapters**: Concrete implementations (TOML modules, in-memory and
//!   `PostgreSQL` stores)
//! - **Services**: Orchestration over ports
//!
//! # Modules
//!
//! - [`agent`]: Parameter introspection, metadata capture and the registry
//! - [`discovery`]: Scanning search paths and evaluating agent modules
//! - [`project`]: Project identity and configuration
//! - [`sync`]: Persisted agent records and the deploy service
//! - [`logging`]: Structured logging bootstrap

pub mod agent;
pub mod discovery;
pub mod logging;
pub mod project;
pub mod sync;
