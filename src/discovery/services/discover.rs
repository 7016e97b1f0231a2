//! Discovery service: scanning search paths and harvesting agents.
//!
//! Provides [`AgentDiscovery`], which walks configured search paths beneath a
//! project root, evaluates each candidate file as an isolated unit, and
//! registers the agents it declares. A unit that fails is reported and
//! skipped; the scan always runs to completion.

use crate::agent::AgentRegistry;
use crate::discovery::{
    domain::{SourceUnit, UnitId},
    ports::{UnitLoadError, UnitLoadResult, UnitLoader},
};
use crate::project::domain::CONFIG_FILE_NAME;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use indexmap::IndexMap;
use parking_lot::Mutex;
use std::any::Any;
use std::collections::HashSet;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that abort a discovery pass.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The project root could not be opened.
    #[error("cannot open project root {path}: {source}")]
    ProjectRoot {
        /// Project root as given.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for discovery passes.
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

/// A unit that failed to load during a pass.
#[derive(Debug, Clone)]
pub struct UnitFailure {
    path: Utf8PathBuf,
    error: UnitLoadError,
}

impl UnitFailure {
    /// Returns the project-relative path of the failed file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Returns why the unit failed.
    #[must_use]
    pub const fn error(&self) -> &UnitLoadError {
        &self.error
    }
}

/// Outcome of one discovery pass.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryReport {
    discovered_count: usize,
    loaded_files: Vec<Utf8PathBuf>,
    failures: Vec<UnitFailure>,
}

impl DiscoveryReport {
    /// Number of registry entries added by the pass.
    ///
    /// This is the growth of the registry, not its total size: names that
    /// were already registered before the pass are not counted again.
    #[must_use]
    pub const fn discovered_count(&self) -> usize {
        self.discovered_count
    }

    /// Project-relative paths of the files that loaded, in processing order.
    #[must_use]
    pub fn loaded_files(&self) -> &[Utf8PathBuf] {
        &self.loaded_files
    }

    /// Files that failed to load, in processing order.
    #[must_use]
    pub fn failures(&self) -> &[UnitFailure] {
        &self.failures
    }

    /// Splits the report into the discovered count and loaded files.
    #[must_use]
    pub fn into_parts(self) -> (usize, Vec<Utf8PathBuf>) {
        (self.discovered_count, self.loaded_files)
    }
}

/// Discovers agents declared in source units beneath a project root.
///
/// Every scanned unit is evaluated, including units this instance has loaded
/// before: re-scanning re-registers their agents, overwriting earlier
/// entries of the same name. [`AgentDiscovery::loaded_units`] records the
/// last successful load of each unit and never suppresses evaluation.
pub struct AgentDiscovery<L>
where
    L: UnitLoader,
{
    loader: Arc<L>,
    registry: AgentRegistry,
    loaded: Mutex<IndexMap<UnitId, Utf8PathBuf>>,
}

impl<L> AgentDiscovery<L>
where
    L: UnitLoader,
{
    /// Creates a discovery service writing into `registry`.
    #[must_use]
    pub fn new(loader: Arc<L>, registry: AgentRegistry) -> Self {
        Self {
            loader,
            registry,
            loaded: Mutex::new(IndexMap::new()),
        }
    }

    /// Returns the registry this service populates.
    #[must_use]
    pub const fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    /// Returns the identifiers of units loaded successfully so far.
    #[must_use]
    pub fn loaded_units(&self) -> Vec<UnitId> {
        self.loaded.lock().keys().cloned().collect()
    }

    /// Forgets which units have been loaded.
    pub fn forget_loaded(&self) {
        self.loaded.lock().clear();
    }

    /// Scans `search_paths` beneath `project_root` and registers every agent
    /// the scanned units declare.
    ///
    /// Search paths are processed in the given order and files within each
    /// path in lexicographic order of their relative path. Missing search
    /// paths are skipped silently, as is the project configuration file at
    /// the root.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::ProjectRoot`] when the project root cannot be
    /// opened. Failures of individual files are reported in the returned
    /// [`DiscoveryReport`] instead.
    pub fn discover(
        &self,
        search_paths: &[Utf8PathBuf],
        project_root: &Utf8Path,
    ) -> DiscoveryResult<DiscoveryReport> {
        let root = Dir::open_ambient_dir(project_root, ambient_authority()).map_err(|source| {
            DiscoveryError::ProjectRoot {
                path: project_root.to_owned(),
                source,
            }
        })?;

        let baseline = self.registry.len();
        let mut seen = HashSet::new();
        let mut report = DiscoveryReport::default();

        for search_path in search_paths {
            for relative in self.candidate_files(&root, search_path) {
                if !seen.insert(relative.clone()) {
                    continue;
                }
                match self.load_file(&root, &relative) {
                    Ok(declared) => {
                        debug!(file = %relative, declared, "loaded agent unit");
                        report.loaded_files.push(relative);
                    }
                    Err(error) => {
                        warn!(file = %relative, %error, "failed to load agent unit");
                        report.failures.push(UnitFailure {
                            path: relative,
                            error,
                        });
                    }
                }
            }
        }

        report.discovered_count = self.registry.len().saturating_sub(baseline);
        info!(
            root = %project_root,
            discovered = report.discovered_count,
            loaded = report.loaded_files.len(),
            failed = report.failures.len(),
            "agent discovery finished"
        );
        Ok(report)
    }

    fn candidate_files(&self, root: &Dir, search_path: &Utf8Path) -> Vec<Utf8PathBuf> {
        let Some(normalized) = contained_path(search_path) else {
            warn!(path = %search_path, "search path leaves the project root, skipping");
            return Vec::new();
        };
        if !root.is_dir(&normalized) {
            debug!(path = %search_path, "search path does not exist, skipping");
            return Vec::new();
        }

        let mut files = Vec::new();
        match root.open_dir(&normalized) {
            Ok(dir) => collect_files(&dir, &normalized, self.loader.extension(), &mut files),
            Err(error) => warn!(path = %search_path, %error, "cannot open search path"),
        }
        files.retain(|file| file.as_str() != CONFIG_FILE_NAME);
        files.sort_by(|left, right| left.as_str().cmp(right.as_str()));
        files
    }

    fn load_file(&self, root: &Dir, relative: &Utf8Path) -> UnitLoadResult<usize> {
        let source = root
            .read_to_string(relative)
            .map_err(|source| UnitLoadError::Read {
                path: relative.to_owned(),
                source: Arc::new(source),
            })?;
        let Some(id) = UnitId::from_relative_path(relative) else {
            return Err(UnitLoadError::Read {
                path: relative.to_owned(),
                source: Arc::new(std::io::Error::other("path has no unit identifier")),
            });
        };

        if let Some(earlier) = self.loaded.lock().get(&id) {
            debug!(unit = %id, from = %earlier, "re-evaluating previously loaded unit");
        }

        let unit = SourceUnit::new(id.clone(), relative.to_owned(), source);
        let exports = catch_unwind(AssertUnwindSafe(|| self.loader.load(&unit))).map_err(
            |payload| UnitLoadError::Panicked {
                unit: id.clone(),
                message: panic_message(payload.as_ref()),
            },
        )??;

        let agents = exports.into_agents();
        let declared = agents.len();
        for descriptor in agents {
            self.registry.register(descriptor);
        }
        self.loaded.lock().insert(id, relative.to_owned());
        Ok(declared)
    }
}

/// Normalizes a search path that must stay inside the project root.
fn contained_path(path: &Utf8Path) -> Option<Utf8PathBuf> {
    let mut normalized = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::Normal(part) => normalized.push(part),
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir | Utf8Component::RootDir | Utf8Component::Prefix(_) => {
                return None;
            }
        }
    }
    if normalized.as_str().is_empty() {
        normalized.push(".");
    }
    Some(normalized)
}

fn collect_files(dir: &Dir, prefix: &Utf8Path, extension: &str, out: &mut Vec<Utf8PathBuf>) {
    let entries = match dir.entries() {
        Ok(entries) => entries,
        Err(error) => {
            warn!(path = %prefix, %error, "cannot list directory");
            return;
        }
    };

    for item in entries {
        let visited = item.and_then(|entry| {
            let name = entry.file_name()?;
            let file_type = entry.file_type()?;
            let relative = relative_join(prefix, &name);
            if file_type.is_dir() {
                collect_files(&entry.open_dir()?, &relative, extension, out);
            } else if file_type.is_file() && is_candidate(&name, extension) {
                out.push(relative);
            }
            Ok(())
        });
        if let Err(error) = visited {
            warn!(path = %prefix, %error, "cannot inspect directory entry");
        }
    }
}

fn relative_join(prefix: &Utf8Path, name: &str) -> Utf8PathBuf {
    if prefix.as_str() == "." {
        Utf8PathBuf::from(name)
    } else {
        prefix.join(name)
    }
}

fn is_candidate(name: &str, extension: &str) -> bool {
    !name.starts_with('_')
        && Utf8Path::new(name)
            .extension()
            .is_some_and(|found| found == extension)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_owned())
}
