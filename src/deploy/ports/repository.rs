//! Repository port for YAML task persistence and lineage lookup.

use crate::deploy::domain::{NewYamlTask, TemplateId, YamlTask, YamlTaskId, YamlTaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for YAML task repository operations.
pub type YamlTaskRepositoryResult<T> = Result<T, YamlTaskRepositoryError>;

/// YAML task persistence contract.
///
/// One storage round-trip per operation; atomicity of each call is the
/// engine's responsibility and no call spans a client-side transaction.
#[async_trait]
pub trait YamlTaskRepository: Send + Sync {
    /// Inserts a new task and returns the stored record with its
    /// engine-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`YamlTaskRepositoryError::Persistence`] on constraint
    /// violation or connectivity failure.
    async fn insert(&self, task: &NewYamlTask) -> YamlTaskRepositoryResult<YamlTask>;

    /// Applies a partial update to the task matching the patch identifier.
    ///
    /// Returns the number of rows affected; zero means no row matched and
    /// is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`YamlTaskRepositoryError::Persistence`] when the engine
    /// rejects the write.
    async fn update(&self, patch: &YamlTaskPatch) -> YamlTaskRepositoryResult<u64>;

    /// Deletes the task with the given identifier.
    ///
    /// Returns the number of rows affected; zero means no row matched and
    /// is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`YamlTaskRepositoryError::Persistence`] when the engine
    /// rejects the delete.
    async fn delete(&self, id: YamlTaskId) -> YamlTaskRepositoryResult<u64>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: YamlTaskId) -> YamlTaskRepositoryResult<Option<YamlTask>>;

    /// Returns all tasks rendered from the given template.
    ///
    /// An empty result is valid; lineage is one-to-many and templates with
    /// zero dependent tasks are permitted.
    async fn find_by_template(
        &self,
        template_id: TemplateId,
    ) -> YamlTaskRepositoryResult<Vec<YamlTask>>;

    /// Returns all stored tasks in the engine's natural order.
    async fn list_all(&self) -> YamlTaskRepositoryResult<Vec<YamlTask>>;
}

/// Errors returned by YAML task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum YamlTaskRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl YamlTaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
