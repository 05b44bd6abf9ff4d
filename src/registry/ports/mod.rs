//! Port contracts for the cluster registry.
//!
//! Ports define infrastructure-agnostic interfaces used by registry
//! services.

pub mod repository;

pub use repository::{
    ClusterRepository, ClusterRepositoryError, ClusterRepositoryResult, RegisteredCluster,
};
