//! `PostgreSQL` adapters for agent record persistence.

mod models;
mod repository;
mod schema;

pub use repository::{AgentPgPool, PostgresAgentStore};
