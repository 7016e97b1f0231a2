//! Sync services: deploying discovered agents into storage.

mod deploy;
mod scopes;
mod startup;

pub use deploy::{DeployError, DeployReport, DeployResult, DeployService};
pub use scopes::{ProjectScope, ProjectScopes};
pub use startup::deploy_on_startup;
