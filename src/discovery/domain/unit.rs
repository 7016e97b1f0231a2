//! Loadable unit identity and payload types.

use crate::agent::domain::AgentDescriptor;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use std::fmt;

/// Collision-free identifier of a source unit.
///
/// Derived from the unit's path relative to the project root with the file
/// extension removed and components joined by `/`, so two files with the same
/// base name in different directories never share an identifier. The same
/// string is the module part of every entrypoint the unit defines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(String);

impl UnitId {
    /// Derives the identifier of a project-relative file path.
    ///
    /// Returns `None` for paths that are absolute, escape the root, or have
    /// no file stem.
    #[must_use]
    pub fn from_relative_path(path: &Utf8Path) -> Option<Self> {
        let stem = path.file_stem()?;
        let mut parts = Vec::new();
        if let Some(parent) = path.parent() {
            for component in parent.components() {
                match component {
                    Utf8Component::Normal(part) => parts.push(part),
                    Utf8Component::CurDir => {}
                    Utf8Component::ParentDir
                    | Utf8Component::RootDir
                    | Utf8Component::Prefix(_) => return None,
                }
            }
        }
        parts.push(stem);
        Some(Self(parts.join("/")))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A source file ready to be evaluated by a unit loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    id: UnitId,
    path: Utf8PathBuf,
    source: String,
}

impl SourceUnit {
    /// Creates a source unit.
    #[must_use]
    pub const fn new(id: UnitId, path: Utf8PathBuf, source: String) -> Self {
        Self { id, path, source }
    }

    /// Returns the unit identifier.
    #[must_use]
    pub const fn id(&self) -> &UnitId {
        &self.id
    }

    /// Returns the project-relative path of the file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Returns the file contents.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Agent declarations collected while evaluating one unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitExports {
    agents: Vec<AgentDescriptor>,
}

impl UnitExports {
    /// Creates exports from declarations in evaluation order.
    #[must_use]
    pub const fn new(agents: Vec<AgentDescriptor>) -> Self {
        Self { agents }
    }

    /// Returns the declared agents in evaluation order.
    #[must_use]
    pub fn agents(&self) -> &[AgentDescriptor] {
        &self.agents
    }

    /// Consumes the exports, yielding the declared agents.
    #[must_use]
    pub fn into_agents(self) -> Vec<AgentDescriptor> {
        self.agents
    }
}
