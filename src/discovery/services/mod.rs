//! Discovery services.

mod discover;

pub use discover::{AgentDiscovery, DiscoveryError, DiscoveryReport, DiscoveryResult, UnitFailure};
