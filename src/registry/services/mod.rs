//! Application services for the cluster registry.

mod registrar;

pub use registrar::ClusterRegistrar;
