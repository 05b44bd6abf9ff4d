//! Cluster descriptor input and persisted registry row types.

use super::{ClusterId, ClusterName, Kubeconfig};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Default action timeout applied when a descriptor omits one.
const DEFAULT_ACTION_TIMEOUT_SECONDS: u32 = 30;

const fn default_action_timeout() -> u32 {
    DEFAULT_ACTION_TIMEOUT_SECONDS
}

/// Resource-quota hints for workloads scheduled onto a cluster.
///
/// Quantity strings use the Kubernetes resource format (`100m`, `512Mi`)
/// and are opaque to this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResourceHints {
    /// Default CPU request.
    #[serde(default)]
    pub cpu_request: String,
    /// Default CPU limit.
    #[serde(default)]
    pub cpu_limit: String,
    /// Default memory request.
    #[serde(default)]
    pub memory_request: String,
    /// Default memory limit.
    #[serde(default)]
    pub memory_limit: String,
}

/// Registration input describing a known Kubernetes cluster.
///
/// Descriptors are supplied by the embedding process — a compiled-in seed
/// list or a configuration document (`Deserialize`) — and upserted into
/// the registry by name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClusterDescriptor {
    name: ClusterName,
    #[serde(default)]
    name_localized: String,
    owner_id: i64,
    #[serde(default)]
    resources: ResourceHints,
    #[serde(default)]
    environment: String,
    #[serde(default)]
    version: String,
    api_server_address: String,
    kubeconfig: Kubeconfig,
    #[serde(default = "default_action_timeout")]
    action_timeout_seconds: u32,
}

impl ClusterDescriptor {
    /// Creates a descriptor with required fields.
    #[must_use]
    pub fn new(
        name: ClusterName,
        owner_id: i64,
        api_server_address: impl Into<String>,
        kubeconfig: Kubeconfig,
    ) -> Self {
        Self {
            name,
            name_localized: String::new(),
            owner_id,
            resources: ResourceHints::default(),
            environment: String::new(),
            version: String::new(),
            api_server_address: api_server_address.into(),
            kubeconfig,
            action_timeout_seconds: DEFAULT_ACTION_TIMEOUT_SECONDS,
        }
    }

    /// Sets the localized display name.
    #[must_use]
    pub fn with_localized_name(mut self, name_localized: impl Into<String>) -> Self {
        self.name_localized = name_localized.into();
        self
    }

    /// Sets the resource-quota hints.
    #[must_use]
    pub fn with_resources(mut self, resources: ResourceHints) -> Self {
        self.resources = resources;
        self
    }

    /// Sets the environment tag.
    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Sets the Kubernetes version string.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the action timeout in seconds.
    #[must_use]
    pub const fn with_action_timeout(mut self, seconds: u32) -> Self {
        self.action_timeout_seconds = seconds;
        self
    }

    /// Returns the cluster name, the natural registration key.
    #[must_use]
    pub const fn name(&self) -> &ClusterName {
        &self.name
    }

    /// Returns the localized display name.
    #[must_use]
    pub fn name_localized(&self) -> &str {
        &self.name_localized
    }

    /// Returns the owning user identifier.
    #[must_use]
    pub const fn owner_id(&self) -> i64 {
        self.owner_id
    }

    /// Returns the resource-quota hints.
    #[must_use]
    pub const fn resources(&self) -> &ResourceHints {
        &self.resources
    }

    /// Returns the environment tag.
    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Returns the Kubernetes version string.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the API server address.
    #[must_use]
    pub fn api_server_address(&self) -> &str {
        &self.api_server_address
    }

    /// Returns the credential material.
    #[must_use]
    pub const fn kubeconfig(&self) -> &Kubeconfig {
        &self.kubeconfig
    }

    /// Returns the action timeout in seconds.
    #[must_use]
    pub const fn action_timeout_seconds(&self) -> u32 {
        self.action_timeout_seconds
    }
}

/// Persisted cluster registry row.
///
/// Credential material is not part of the row; it lives in a separate
/// access-controlled sub-entity fetched through the repository port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    id: ClusterId,
    name: ClusterName,
    name_localized: String,
    owner_id: i64,
    resources: ResourceHints,
    environment: String,
    version: String,
    api_server_address: String,
    action_timeout_seconds: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted cluster row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedClusterData {
    /// Engine-assigned cluster identifier.
    pub id: ClusterId,
    /// Persisted cluster name.
    pub name: ClusterName,
    /// Persisted localized display name.
    pub name_localized: String,
    /// Persisted owning user identifier.
    pub owner_id: i64,
    /// Persisted resource-quota hints.
    pub resources: ResourceHints,
    /// Persisted environment tag.
    pub environment: String,
    /// Persisted Kubernetes version string.
    pub version: String,
    /// Persisted API server address.
    pub api_server_address: String,
    /// Persisted action timeout in seconds.
    pub action_timeout_seconds: u32,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Cluster {
    /// Builds the registry row a descriptor registers as, with the
    /// engine-assigned identifier and registration timestamp.
    #[must_use]
    pub fn from_descriptor(
        id: ClusterId,
        descriptor: &ClusterDescriptor,
        registered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: descriptor.name.clone(),
            name_localized: descriptor.name_localized.clone(),
            owner_id: descriptor.owner_id,
            resources: descriptor.resources.clone(),
            environment: descriptor.environment.clone(),
            version: descriptor.version.clone(),
            api_server_address: descriptor.api_server_address.clone(),
            action_timeout_seconds: descriptor.action_timeout_seconds,
            created_at: registered_at,
            updated_at: registered_at,
        }
    }

    /// Reconstructs a cluster row from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedClusterData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            name_localized: data.name_localized,
            owner_id: data.owner_id,
            resources: data.resources,
            environment: data.environment,
            version: data.version,
            api_server_address: data.api_server_address,
            action_timeout_seconds: data.action_timeout_seconds,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the engine-assigned cluster identifier.
    #[must_use]
    pub const fn id(&self) -> ClusterId {
        self.id
    }

    /// Returns the cluster name.
    #[must_use]
    pub const fn name(&self) -> &ClusterName {
        &self.name
    }

    /// Returns the localized display name.
    #[must_use]
    pub fn name_localized(&self) -> &str {
        &self.name_localized
    }

    /// Returns the owning user identifier.
    #[must_use]
    pub const fn owner_id(&self) -> i64 {
        self.owner_id
    }

    /// Returns the resource-quota hints.
    #[must_use]
    pub const fn resources(&self) -> &ResourceHints {
        &self.resources
    }

    /// Returns the environment tag.
    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Returns the Kubernetes version string.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the API server address.
    #[must_use]
    pub fn api_server_address(&self) -> &str {
        &self.api_server_address
    }

    /// Returns the action timeout in seconds.
    #[must_use]
    pub const fn action_timeout_seconds(&self) -> u32 {
        self.action_timeout_seconds
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
