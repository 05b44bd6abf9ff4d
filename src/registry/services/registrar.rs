//! Startup-time idempotent seeding of the cluster registry.

use crate::registry::{
    domain::ClusterDescriptor,
    ports::{ClusterRepository, RegisteredCluster},
};
use mockable::Clock;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Idempotent cluster registry seeder.
///
/// Iterates an injected descriptor sequence once per [`bootstrap`] call,
/// registering each descriptor by name through the repository's atomic
/// find-or-create. Seeding is a best-effort convenience: per-descriptor
/// failures are logged and skipped, never propagated, and the full
/// sequence is always processed.
///
/// Init code may race concurrent `bootstrap` calls; an internal mutex
/// serializes them so a single process never double-drives the upsert
/// sequence.
///
/// [`bootstrap`]: ClusterRegistrar::bootstrap
pub struct ClusterRegistrar<R, C>
where
    R: ClusterRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    descriptors: Vec<ClusterDescriptor>,
    clock: Arc<C>,
    guard: Mutex<()>,
}

impl<R, C> ClusterRegistrar<R, C>
where
    R: ClusterRepository,
    C: Clock + Send + Sync,
{
    /// Creates a registrar over the given descriptor sequence.
    #[must_use]
    pub fn new(repository: Arc<R>, descriptors: Vec<ClusterDescriptor>, clock: Arc<C>) -> Self {
        Self {
            repository,
            descriptors,
            clock,
            guard: Mutex::new(()),
        }
    }

    /// Seeds the registry with every configured descriptor.
    ///
    /// Completion is the only observable result; outcomes are emitted as
    /// structured log events.
    pub async fn bootstrap(&self) {
        let _serialized = self.guard.lock().await;

        for descriptor in &self.descriptors {
            let registered_at = self.clock.utc();
            match self
                .repository
                .find_or_create(descriptor, registered_at)
                .await
            {
                Ok(RegisteredCluster::Created(cluster)) => {
                    info!(
                        cluster_id = cluster.id().value(),
                        name = %cluster.name(),
                        "registered cluster"
                    );
                }
                Ok(RegisteredCluster::Existing(cluster)) => {
                    debug!(
                        cluster_id = cluster.id().value(),
                        name = %cluster.name(),
                        "cluster already registered"
                    );
                }
                Err(err) => {
                    warn!(
                        name = %descriptor.name(),
                        error = %err,
                        "cluster registration failed, continuing with remaining descriptors"
                    );
                }
            }
        }
    }
}
