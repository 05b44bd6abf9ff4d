//! Domain model for the cluster registry.
//!
//! The registry domain models descriptors of known Kubernetes clusters —
//! connection metadata, quota hints, and opaque credential material —
//! and the persisted registry rows seeded from them, while keeping all
//! infrastructure concerns outside of the domain boundary.

mod cluster;
mod error;
mod ids;
mod kubeconfig;

pub use cluster::{Cluster, ClusterDescriptor, PersistedClusterData, ResourceHints};
pub use error::ClusterDomainError;
pub use ids::{ClusterId, ClusterName};
pub use kubeconfig::Kubeconfig;
