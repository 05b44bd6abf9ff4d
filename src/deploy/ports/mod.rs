//! Port contracts for YAML task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by deploy services.

pub mod repository;

pub use repository::{YamlTaskRepository, YamlTaskRepositoryError, YamlTaskRepositoryResult};
