//! In-memory agent record storage.

mod agent_store;

pub use agent_store::InMemoryAgentStore;
