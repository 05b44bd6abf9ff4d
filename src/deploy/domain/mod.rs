//! Domain model for YAML deployment-task storage.
//!
//! The deploy domain models durable records of deployment tasks rendered
//! from reusable YAML templates: engine-assigned identity, template
//! lineage, and partial mutation, while keeping all infrastructure
//! concerns outside of the domain boundary.

mod error;
mod ids;
mod yaml_task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskName, TemplateId, YamlTaskId};
pub use yaml_task::{NewYamlTask, PersistedYamlTaskData, TaskStatus, YamlTask, YamlTaskPatch};
