//! In-memory repository for the cluster registry.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::registry::{
    domain::{Cluster, ClusterDescriptor, ClusterId, ClusterName, Kubeconfig},
    ports::{ClusterRepository, ClusterRepositoryError, ClusterRepositoryResult, RegisteredCluster},
};

/// Thread-safe in-memory cluster registry.
///
/// Identifiers are assigned monotonically starting at 1. Credential
/// material lives in a separate map keyed by cluster id, mirroring the
/// production schema's sub-entity split.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClusterRepository {
    state: Arc<RwLock<InMemoryClusterState>>,
}

#[derive(Debug)]
struct InMemoryClusterState {
    clusters: BTreeMap<ClusterId, Cluster>,
    name_index: HashMap<ClusterName, ClusterId>,
    credentials: HashMap<ClusterId, Kubeconfig>,
    next_id: i64,
}

impl Default for InMemoryClusterState {
    fn default() -> Self {
        Self {
            clusters: BTreeMap::new(),
            name_index: HashMap::new(),
            credentials: HashMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryClusterRepository {
    /// Creates an empty in-memory registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> ClusterRepositoryError {
    ClusterRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ClusterRepository for InMemoryClusterRepository {
    async fn find_or_create(
        &self,
        descriptor: &ClusterDescriptor,
        registered_at: DateTime<Utc>,
    ) -> ClusterRepositoryResult<RegisteredCluster> {
        let mut state = self.state.write().map_err(lock_poisoned)?;

        if let Some(existing_id) = state.name_index.get(descriptor.name()) {
            let existing = state
                .clusters
                .get(existing_id)
                .cloned()
                .ok_or_else(|| lock_poisoned("name index points at a missing cluster row"))?;
            return Ok(RegisteredCluster::Existing(existing));
        }

        let id =
            ClusterId::new(state.next_id).map_err(ClusterRepositoryError::persistence)?;
        state.next_id += 1;

        let cluster = Cluster::from_descriptor(id, descriptor, registered_at);
        state.name_index.insert(descriptor.name().clone(), id);
        state.credentials.insert(id, descriptor.kubeconfig().clone());
        state.clusters.insert(id, cluster.clone());
        Ok(RegisteredCluster::Created(cluster))
    }

    async fn find_by_name(&self, name: &ClusterName) -> ClusterRepositoryResult<Option<Cluster>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let cluster = state
            .name_index
            .get(name)
            .and_then(|id| state.clusters.get(id))
            .cloned();
        Ok(cluster)
    }

    async fn list(&self) -> ClusterRepositoryResult<Vec<Cluster>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.clusters.values().cloned().collect())
    }

    async fn credential(&self, id: ClusterId) -> ClusterRepositoryResult<Option<Kubeconfig>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.credentials.get(&id).cloned())
    }
}
