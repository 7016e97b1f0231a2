//! Reconciling discovered agents with persistent storage.
//!
//! - Persisted record types in [`domain`]
//! - The storage contract in [`ports`]
//! - In-memory and `PostgreSQL` stores in [`adapters`]
//! - The deploy orchestration in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

pub use services::{DeployReport, DeployService, deploy_on_startup};

#[cfg(test)]
mod tests;
