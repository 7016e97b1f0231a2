//! Startup deploy hook.

use super::{DeployReport, DeployResult, DeployService};
use crate::discovery::ports::UnitLoader;
use crate::project::{domain::DevMode, ports::ProjectConfigSource};
use crate::sync::ports::AgentRecordRepository;
use camino::Utf8Path;
use mockable::Clock;
use tracing::{debug, error};

/// Deploys the project at `project_root` when the process starts in
/// development mode and the project enables auto-discovery.
///
/// Returns `Ok(None)` when the deploy is skipped. Failures are logged at
/// `error` level before being returned.
///
/// # Errors
///
/// Returns the [`super::DeployError`] of a failed configuration load or
/// deploy.
pub async fn deploy_on_startup<R, L, S, C>(
    service: &DeployService<R, L, S, C>,
    project_root: &Utf8Path,
    dev_mode: DevMode,
) -> DeployResult<Option<DeployReport>>
where
    R: AgentRecordRepository,
    L: UnitLoader + 'static,
    S: ProjectConfigSource,
    C: Clock + Send + Sync,
{
    if !dev_mode.is_enabled() {
        debug!(root = %project_root, "not in development mode, skipping startup deploy");
        return Ok(None);
    }

    let outcome = match service.project_config(project_root) {
        Ok(config) if !config.auto_discover => {
            debug!(root = %project_root, "auto-discovery disabled, skipping startup deploy");
            return Ok(None);
        }
        Ok(_) => service.deploy(project_root).await,
        Err(err) => Err(err),
    };

    outcome.map(Some).inspect_err(|err| {
        error!(root = %project_root, error = %err, "startup deploy failed");
    })
}
