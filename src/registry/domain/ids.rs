//! Identifier and validated key types for the registry domain.

use super::ClusterDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Surrogate identifier for a persisted cluster registry row.
///
/// Assigned by the storage engine on insert and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterId(i64);

impl ClusterId {
    /// Creates a validated cluster identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterDomainError::InvalidClusterId`] when the value is
    /// zero or negative.
    pub const fn new(value: i64) -> Result<Self, ClusterDomainError> {
        if value <= 0 {
            return Err(ClusterDomainError::InvalidClusterId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum length for a cluster name, matching the `VARCHAR(255)` column.
const MAX_NAME_LENGTH: usize = 255;

/// Validated cluster name: the natural key for idempotent registration.
///
/// Re-registering a descriptor whose name already exists leaves the
/// stored row untouched; uniqueness is enforced by the storage engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterName(String);

impl ClusterName {
    /// Creates a validated cluster name.
    ///
    /// The input is trimmed; case is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterDomainError::EmptyClusterName`] when the value is
    /// empty after trimming, or [`ClusterDomainError::ClusterNameTooLong`]
    /// when it exceeds 255 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ClusterDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(ClusterDomainError::EmptyClusterName);
        }

        if normalized.len() > MAX_NAME_LENGTH {
            return Err(ClusterDomainError::ClusterNameTooLong(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the cluster name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ClusterName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ClusterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
