//! Service layer for YAML task storage and lineage queries.

use crate::deploy::{
    domain::{
        NewYamlTask, TaskDomainError, TaskName, TaskStatus, TemplateId, YamlTask, YamlTaskId,
        YamlTaskPatch,
    },
    ports::{YamlTaskRepository, YamlTaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Request payload for creating a YAML task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateYamlTaskRequest {
    template_id: i64,
    name: String,
    content: String,
    status: Option<TaskStatus>,
}

impl CreateYamlTaskRequest {
    /// Creates a request with required task fields.
    #[must_use]
    pub fn new(template_id: i64, name: impl Into<String>) -> Self {
        Self {
            template_id,
            name: name.into(),
            content: String::new(),
            status: None,
        }
    }

    /// Sets the rendered manifest content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Overrides the initial execution status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Request payload for partially updating an existing YAML task.
///
/// Only fields set through the builder methods are written; the matched
/// row's mutation timestamp always advances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateYamlTaskRequest {
    id: i64,
    template_id: Option<i64>,
    name: Option<String>,
    content: Option<String>,
    status: Option<TaskStatus>,
}

impl UpdateYamlTaskRequest {
    /// Creates an empty update request for the given task identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self {
            id,
            template_id: None,
            name: None,
            content: None,
            status: None,
        }
    }

    /// Sets a new template lineage reference.
    #[must_use]
    pub const fn with_template_id(mut self, template_id: i64) -> Self {
        self.template_id = Some(template_id);
        self
    }

    /// Sets a new task name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets new rendered manifest content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets a new execution status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Service-level errors for YAML task storage operations.
#[derive(Debug, Error)]
pub enum YamlTaskStoreError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// No task exists with the requested identifier.
    #[error("yaml task {id} not found")]
    NotFound {
        /// The identifier that matched no row.
        id: YamlTaskId,
    },

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] YamlTaskRepositoryError),
}

/// Result type for YAML task store operations.
pub type YamlTaskStoreResult<T> = Result<T, YamlTaskStoreError>;

/// YAML task storage orchestration service.
///
/// Validates raw caller input into domain types, stamps timestamps from
/// the injected clock, and logs every failure before propagating it
/// unchanged.
#[derive(Clone)]
pub struct YamlTaskStore<R, C>
where
    R: YamlTaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> YamlTaskStore<R, C>
where
    R: YamlTaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new YAML task store.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns all stored tasks in the engine's natural order.
    ///
    /// An empty result is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`YamlTaskStoreError::Repository`] when the engine lookup
    /// fails.
    pub async fn list_all(&self) -> YamlTaskStoreResult<Vec<YamlTask>> {
        self.repository.list_all().await.map_err(|err| {
            error!(error = %err, "listing yaml tasks failed");
            err.into()
        })
    }

    /// Creates a new task record and returns it with its engine-assigned
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`YamlTaskStoreError::Domain`] when input validation fails,
    /// or [`YamlTaskStoreError::Repository`] when the engine rejects the
    /// insert.
    pub async fn create(&self, request: CreateYamlTaskRequest) -> YamlTaskStoreResult<YamlTask> {
        let template_id = TemplateId::new(request.template_id)?;
        let name = TaskName::new(request.name)?;

        let mut task = NewYamlTask::new(template_id, name, request.content, &*self.clock);
        if let Some(status) = request.status {
            task = task.with_status(status);
        }

        self.repository.insert(&task).await.map_err(|err| {
            error!(
                template_id = template_id.value(),
                name = %task.name(),
                error = %err,
                "creating yaml task failed"
            );
            err.into()
        })
    }

    /// Applies a partial update to the task matching the request
    /// identifier and returns the number of rows affected.
    ///
    /// Zero rows affected means no task carried the identifier; that is
    /// not an error, and callers decide whether it is acceptable.
    ///
    /// # Errors
    ///
    /// Returns [`YamlTaskStoreError::Domain`] when input validation fails,
    /// or [`YamlTaskStoreError::Repository`] when the engine rejects the
    /// write.
    pub async fn update(&self, request: UpdateYamlTaskRequest) -> YamlTaskStoreResult<u64> {
        let patch = self.build_patch(request)?;
        let task_id = patch.id();

        let affected = self.repository.update(&patch).await.map_err(|err| {
            error!(task_id = task_id.value(), error = %err, "updating yaml task failed");
            YamlTaskStoreError::from(err)
        })?;

        if affected == 0 {
            debug!(task_id = task_id.value(), "yaml task update matched no rows");
        }
        Ok(affected)
    }

    /// Deletes the task with the given identifier and returns the number
    /// of rows affected.
    ///
    /// Deleting a non-existent task affects zero rows and is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`YamlTaskStoreError::Repository`] when the engine rejects
    /// the delete.
    pub async fn delete(&self, id: YamlTaskId) -> YamlTaskStoreResult<u64> {
        self.repository.delete(id).await.map_err(|err| {
            error!(task_id = id.value(), error = %err, "deleting yaml task failed");
            err.into()
        })
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`YamlTaskStoreError::NotFound`] when no task carries the
    /// identifier, or [`YamlTaskStoreError::Repository`] when the engine
    /// lookup fails.
    pub async fn get_by_id(&self, id: YamlTaskId) -> YamlTaskStoreResult<YamlTask> {
        let found = self.repository.find_by_id(id).await.map_err(|err| {
            error!(task_id = id.value(), error = %err, "fetching yaml task failed");
            YamlTaskStoreError::from(err)
        })?;

        found.ok_or_else(|| {
            warn!(task_id = id.value(), "yaml task not found");
            YamlTaskStoreError::NotFound { id }
        })
    }

    /// Returns all tasks rendered from the given template.
    ///
    /// An empty lineage is valid and logged once at info level.
    ///
    /// # Errors
    ///
    /// Returns [`YamlTaskStoreError::Repository`] when the engine lookup
    /// fails.
    pub async fn get_by_template(
        &self,
        template_id: TemplateId,
    ) -> YamlTaskStoreResult<Vec<YamlTask>> {
        let tasks = self
            .repository
            .find_by_template(template_id)
            .await
            .map_err(|err| {
                error!(
                    template_id = template_id.value(),
                    error = %err,
                    "fetching yaml tasks by template failed"
                );
                YamlTaskStoreError::from(err)
            })?;

        if tasks.is_empty() {
            info!(
                template_id = template_id.value(),
                "no yaml tasks reference template"
            );
        }
        Ok(tasks)
    }

    fn build_patch(&self, request: UpdateYamlTaskRequest) -> YamlTaskStoreResult<YamlTaskPatch> {
        let UpdateYamlTaskRequest {
            id,
            template_id,
            name,
            content,
            status,
        } = request;

        let mut patch = YamlTaskPatch::new(YamlTaskId::new(id)?, &*self.clock);
        if let Some(template) = template_id {
            patch = patch.with_template_id(TemplateId::new(template)?);
        }
        if let Some(value) = name {
            patch = patch.with_name(TaskName::new(value)?);
        }
        if let Some(value) = content {
            patch = patch.with_content(value);
        }
        if let Some(value) = status {
            patch = patch.with_status(value);
        }
        Ok(patch)
    }
}
