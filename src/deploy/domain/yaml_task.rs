//! YAML task aggregate root and related mutation types.

use super::{ParseTaskStatusError, TaskName, TemplateId, YamlTaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Execution status of a YAML deployment task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been recorded but not yet applied.
    Pending,
    /// Task was applied successfully.
    Succeeded,
    /// Task application failed.
    Failed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "succeeded" => Ok(Self::Succeeded),
            "failed" => Ok(Self::Failed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Persisted YAML deployment task.
///
/// The identifier is assigned by the storage engine on insert; every other
/// field is caller-supplied. The rendered manifest content is opaque to
/// this crate beyond persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YamlTask {
    id: YamlTaskId,
    template_id: TemplateId,
    name: TaskName,
    content: String,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedYamlTaskData {
    /// Engine-assigned task identifier.
    pub id: YamlTaskId,
    /// Persisted template lineage reference.
    pub template_id: TemplateId,
    /// Persisted task name.
    pub name: TaskName,
    /// Persisted rendered manifest content.
    pub content: String,
    /// Persisted execution status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl YamlTask {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedYamlTaskData) -> Self {
        Self {
            id: data.id,
            template_id: data.template_id,
            name: data.name,
            content: data.content,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the engine-assigned task identifier.
    #[must_use]
    pub const fn id(&self) -> YamlTaskId {
        self.id
    }

    /// Returns the template lineage reference.
    #[must_use]
    pub const fn template_id(&self) -> TemplateId {
        self.template_id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the rendered manifest content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the execution status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a partial update in place.
    ///
    /// Only fields the patch carries are overwritten; the mutation
    /// timestamp always advances to the patch's timestamp.
    pub fn apply(&mut self, patch: &YamlTaskPatch) {
        debug_assert_eq!(patch.id(), self.id, "patch applied to a different task");
        if let Some(template_id) = patch.template_id() {
            self.template_id = template_id;
        }
        if let Some(name) = patch.name() {
            self.name = name.clone();
        }
        if let Some(content) = patch.content() {
            self.content = content.to_owned();
        }
        if let Some(status) = patch.status() {
            self.status = status;
        }
        self.updated_at = patch.updated_at();
    }
}

/// Insert model for a task the engine has not yet assigned an id to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewYamlTask {
    template_id: TemplateId,
    name: TaskName,
    content: String,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NewYamlTask {
    /// Creates an insert model with status [`TaskStatus::Pending`] and
    /// timestamps taken from the given clock.
    #[must_use]
    pub fn new(
        template_id: TemplateId,
        name: TaskName,
        content: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            template_id,
            name,
            content: content.into(),
            status: TaskStatus::Pending,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Overrides the initial execution status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the template lineage reference.
    #[must_use]
    pub const fn template_id(&self) -> TemplateId {
        self.template_id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the rendered manifest content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the initial execution status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the initial mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Promotes the insert model to a persisted task with the id the
    /// engine assigned.
    #[must_use]
    pub fn into_persisted(self, id: YamlTaskId) -> YamlTask {
        YamlTask {
            id,
            template_id: self.template_id,
            name: self.name,
            content: self.content,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Partial update against an existing task, matched by identifier.
///
/// Absent fields are left untouched by the engine. Applying a patch whose
/// identifier matches no row affects zero rows; that outcome is reported
/// through the affected-row count, not as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YamlTaskPatch {
    id: YamlTaskId,
    template_id: Option<TemplateId>,
    name: Option<TaskName>,
    content: Option<String>,
    status: Option<TaskStatus>,
    updated_at: DateTime<Utc>,
}

impl YamlTaskPatch {
    /// Creates an empty patch for the given task, stamped from the clock.
    #[must_use]
    pub fn new(id: YamlTaskId, clock: &impl Clock) -> Self {
        Self {
            id,
            template_id: None,
            name: None,
            content: None,
            status: None,
            updated_at: clock.utc(),
        }
    }

    /// Sets a new template lineage reference.
    #[must_use]
    pub const fn with_template_id(mut self, template_id: TemplateId) -> Self {
        self.template_id = Some(template_id);
        self
    }

    /// Sets a new task name.
    #[must_use]
    pub fn with_name(mut self, name: TaskName) -> Self {
        self.name = Some(name);
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

    /// Returns the identifier of the task to patch.
    #[must_use]
    pub const fn id(&self) -> YamlTaskId {
        self.id
    }

    /// Returns the new template reference, if any.
    #[must_use]
    pub const fn template_id(&self) -> Option<TemplateId> {
        self.template_id
    }

    /// Returns the new task name, if any.
    #[must_use]
    pub const fn name(&self) -> Option<&TaskName> {
        self.name.as_ref()
    }

    /// Returns the new manifest content, if any.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Returns the new execution status, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the mutation timestamp the patch stamps onto matched rows.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when the patch carries no field changes.
    ///
    /// A no-op patch still advances the mutation timestamp of a matched
    /// row.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.template_id.is_none()
            && self.name.is_none()
            && self.content.is_none()
            && self.status.is_none()
    }
}
