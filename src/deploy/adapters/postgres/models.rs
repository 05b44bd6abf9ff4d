//! Diesel row models for YAML task persistence.

use super::schema::yaml_tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = yaml_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct YamlTaskRow {
    /// Engine-assigned task identifier.
    pub id: i64,
    /// Template lineage reference.
    pub template_id: i64,
    /// Human-readable task name.
    pub name: String,
    /// Rendered manifest content.
    pub content: String,
    /// Execution status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records; the engine assigns the identifier.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = yaml_tasks)]
pub struct NewYamlTaskRow {
    /// Template lineage reference.
    pub template_id: i64,
    /// Human-readable task name.
    pub name: String,
    /// Rendered manifest content.
    pub content: String,
    /// Execution status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Partial-update changeset; `None` fields are left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = yaml_tasks)]
pub struct YamlTaskChangeset {
    /// New template lineage reference, if any.
    pub template_id: Option<i64>,
    /// New task name, if any.
    pub name: Option<String>,
    /// New manifest content, if any.
    pub content: Option<String>,
    /// New execution status, if any.
    pub status: Option<String>,
    /// Mutation timestamp stamped onto matched rows.
    pub updated_at: DateTime<Utc>,
}
