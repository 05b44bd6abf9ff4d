//! Diesel row models for cluster registry persistence.

use super::schema::{cluster_credentials, clusters};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for cluster records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = clusters)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ClusterRow {
    /// Engine-assigned cluster identifier.
    pub id: i64,
    /// Cluster name, the natural registration key.
    pub name: String,
    /// Localized display name.
    pub name_localized: String,
    /// Owning user identifier.
    pub owner_id: i64,
    /// Default CPU request quantity.
    pub cpu_request: String,
    /// Default CPU limit quantity.
    pub cpu_limit: String,
    /// Default memory request quantity.
    pub memory_request: String,
    /// Default memory limit quantity.
    pub memory_limit: String,
    /// Environment tag.
    pub environment: String,
    /// Kubernetes version string.
    pub version: String,
    /// API server address.
    pub api_server_address: String,
    /// Action timeout in seconds.
    pub action_timeout_seconds: i32,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for cluster records; the engine assigns the identifier.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = clusters)]
pub struct NewClusterRow {
    /// Cluster name, the natural registration key.
    pub name: String,
    /// Localized display name.
    pub name_localized: String,
    /// Owning user identifier.
    pub owner_id: i64,
    /// Default CPU request quantity.
    pub cpu_request: String,
    /// Default CPU limit quantity.
    pub cpu_limit: String,
    /// Default memory request quantity.
    pub memory_request: String,
    /// Default memory limit quantity.
    pub memory_limit: String,
    /// Environment tag.
    pub environment: String,
    /// Kubernetes version string.
    pub version: String,
    /// API server address.
    pub api_server_address: String,
    /// Action timeout in seconds.
    pub action_timeout_seconds: i32,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for the credential sub-entity.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = cluster_credentials)]
pub struct NewClusterCredentialRow {
    /// Owning cluster identifier.
    pub cluster_id: i64,
    /// Opaque kubeconfig content.
    pub kubeconfig: String,
}
