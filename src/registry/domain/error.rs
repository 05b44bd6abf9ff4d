//! Error types for registry domain validation.

use thiserror::Error;

/// Errors returned while constructing registry domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClusterDomainError {
    /// The cluster identifier is not a positive integer.
    #[error("invalid cluster id {0}, expected a positive integer")]
    InvalidClusterId(i64),

    /// The cluster name is empty after trimming.
    #[error("cluster name must not be empty")]
    EmptyClusterName,

    /// The cluster name exceeds the storable maximum length.
    #[error("cluster name '{0}' exceeds 255 characters")]
    ClusterNameTooLong(String),
}
