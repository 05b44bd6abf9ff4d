//! Error types for deploy domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is not a positive integer.
    #[error("invalid task id {0}, expected a positive integer")]
    InvalidTaskId(i64),

    /// The template identifier is not a positive integer.
    #[error("invalid template id {0}, expected a positive integer")]
    InvalidTemplateId(i64),

    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The task name exceeds the storable maximum length.
    #[error("task name '{0}' exceeds 255 characters")]
    TaskNameTooLong(String),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
