//! Deterministic project identifiers.

use super::{ProjectError, ProjectRoot};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

const ID_LEN: usize = 16;

/// Stable identifier of a project, derived from its normalized root path.
///
/// The identifier is the first 16 lowercase hex characters of the SHA-256
/// digest of the path, so the same path yields the same identifier in every
/// process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectId(String);

impl ProjectId {
    /// Derives the identifier of a project root.
    #[must_use]
    pub fn for_root(root: &ProjectRoot) -> Self {
        let digest = Sha256::digest(root.as_path().as_str().as_bytes());
        let mut encoded = hex::encode(digest);
        encoded.truncate(ID_LEN);
        Self(encoded)
    }

    /// Parses a stored identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::InvalidProjectId`] unless `value` is exactly 16
    /// lowercase hex characters.
    pub fn parse(value: impl Into<String>) -> Result<Self, ProjectError> {
        let raw = value.into();
        let well_formed = raw.len() == ID_LEN
            && raw
                .chars()
                .all(|ch| ch.is_ascii_digit() || ('a'..='f').contains(&ch));
        if well_formed {
            Ok(Self(raw))
        } else {
            Err(ProjectError::InvalidProjectId(raw))
        }
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProjectId {
    type Error = ProjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ProjectId> for String {
    fn from(id: ProjectId) -> Self {
        id.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
