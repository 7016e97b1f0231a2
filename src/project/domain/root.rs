//! Normalized project root paths.

use super::ProjectError;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use std::fmt;

/// Absolute, lexically normalized path of a project directory.
///
/// `.` components are dropped and `..` components remove their parent
/// without consulting the filesystem, so symlinks are not resolved and the
/// directory need not exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectRoot(Utf8PathBuf);

impl ProjectRoot {
    /// Normalizes `path`, joining it onto the current directory when relative.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::EmptyRoot`] for an empty path and
    /// [`ProjectError::CurrentDir`] when a relative path cannot be
    /// absolutized.
    pub fn new(path: impl AsRef<Utf8Path>) -> Result<Self, ProjectError> {
        let given = path.as_ref();
        if given.as_str().trim().is_empty() {
            return Err(ProjectError::EmptyRoot);
        }
        if given.is_absolute() {
            return Ok(Self(normalize(given)));
        }

        let current_dir_error = |message: String| ProjectError::CurrentDir {
            path: given.to_string(),
            message,
        };
        let cwd = std::env::current_dir().map_err(|err| current_dir_error(err.to_string()))?;
        let base = Utf8PathBuf::try_from(cwd).map_err(|err| current_dir_error(err.to_string()))?;
        Ok(Self(normalize(&base.join(given))))
    }

    /// Returns the normalized path.
    #[must_use]
    pub fn as_path(&self) -> &Utf8Path {
        &self.0
    }

    /// Consumes the root, yielding the normalized path.
    #[must_use]
    pub fn into_path_buf(self) -> Utf8PathBuf {
        self.0
    }
}

impl AsRef<Utf8Path> for ProjectRoot {
    fn as_ref(&self) -> &Utf8Path {
        &self.0
    }
}

impl fmt::Display for ProjectRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

fn normalize(path: &Utf8Path) -> Utf8PathBuf {
    let mut normalized = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::Prefix(_) | Utf8Component::RootDir | Utf8Component::Normal(_) => {
                normalized.push(component.as_str());
            }
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                // `..` at the root stays at the root.
                if normalized.parent().is_some() {
                    normalized.pop();
                }
            }
        }
    }
    normalized
}
