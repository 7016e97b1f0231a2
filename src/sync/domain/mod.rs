//! Domain types for persisted agent records.

mod entrypoint;
mod error;
mod ids;
mod record;

pub use entrypoint::Entrypoint;
pub use error::SyncDomainError;
pub use ids::AgentRecordId;
pub use record::{AgentRecord, PersistedAgentData};
