//! Port contracts for agent record persistence.

mod repository;

pub use repository::{AgentRecordRepository, AgentStoreError, AgentStoreResult};

#[cfg(test)]
pub use repository::MockAgentRecordRepository;
