//! Identifier and validated scalar types for the deploy domain.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Surrogate identifier for a persisted YAML task.
///
/// Assigned by the storage engine on insert and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YamlTaskId(i64);

impl YamlTaskId {
    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTaskId`] when the value is zero or
    /// negative.
    pub const fn new(value: i64) -> Result<Self, TaskDomainError> {
        if value <= 0 {
            return Err(TaskDomainError::InvalidTaskId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for YamlTaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to the YAML template a task was rendered from.
///
/// Templates are owned by an external collaborator; many tasks may share
/// one template and referential integrity is not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(i64);

impl TemplateId {
    /// Creates a validated template reference.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTemplateId`] when the value is zero
    /// or negative.
    pub const fn new(value: i64) -> Result<Self, TaskDomainError> {
        if value <= 0 {
            return Err(TaskDomainError::InvalidTemplateId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum length for a task name, matching the `VARCHAR(255)` column.
const MAX_NAME_LENGTH: usize = 255;

/// Validated human-readable task name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskName(String);

impl TaskName {
    /// Creates a validated task name.
    ///
    /// The input is trimmed; case is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] when the value is empty
    /// after trimming, or [`TaskDomainError::TaskNameTooLong`] when it
    /// exceeds 255 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTaskName);
        }

        if normalized.len() > MAX_NAME_LENGTH {
            return Err(TaskDomainError::TaskNameTooLong(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the task name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
