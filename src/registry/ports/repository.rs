//! Repository port for cluster registry persistence.

use crate::registry::domain::{Cluster, ClusterDescriptor, ClusterId, ClusterName, Kubeconfig};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for cluster repository operations.
pub type ClusterRepositoryResult<T> = Result<T, ClusterRepositoryError>;

/// Outcome of an idempotent registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisteredCluster {
    /// No row carried the descriptor's name; a new row was inserted.
    Created(Cluster),
    /// A row with the descriptor's name already existed and was left
    /// untouched.
    Existing(Cluster),
}

impl RegisteredCluster {
    /// Returns the registered cluster row.
    #[must_use]
    pub const fn cluster(&self) -> &Cluster {
        match self {
            Self::Created(cluster) | Self::Existing(cluster) => cluster,
        }
    }

    /// Returns `true` when the attempt inserted a new row.
    #[must_use]
    pub const fn was_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    /// Consumes the outcome, returning the cluster row.
    #[must_use]
    pub fn into_cluster(self) -> Cluster {
        match self {
            Self::Created(cluster) | Self::Existing(cluster) => cluster,
        }
    }
}

/// Cluster registry persistence contract.
#[async_trait]
pub trait ClusterRepository: Send + Sync {
    /// Registers the descriptor under its name if no row carries that
    /// name yet, atomically.
    ///
    /// The check and the insert must not be separable by a concurrent
    /// writer: implementations use the engine's conflict handling
    /// (insert-on-conflict-do-nothing), not a composed read and write.
    /// Credential material is stored alongside in its own sub-entity,
    /// only when the row is created.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterRepositoryError::Persistence`] when the engine
    /// rejects the registration.
    async fn find_or_create(
        &self,
        descriptor: &ClusterDescriptor,
        registered_at: DateTime<Utc>,
    ) -> ClusterRepositoryResult<RegisteredCluster>;

    /// Finds a cluster row by its unique name.
    ///
    /// Returns `None` when no cluster carries the name.
    async fn find_by_name(&self, name: &ClusterName) -> ClusterRepositoryResult<Option<Cluster>>;

    /// Returns all registered cluster rows.
    async fn list(&self) -> ClusterRepositoryResult<Vec<Cluster>>;

    /// Fetches the credential material stored for a cluster.
    ///
    /// Returns `None` when the cluster has no stored credential. This is
    /// the only read path to kubeconfig content; registry rows never
    /// carry it.
    async fn credential(&self, id: ClusterId) -> ClusterRepositoryResult<Option<Kubeconfig>>;
}

/// Errors returned by cluster repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ClusterRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ClusterRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
