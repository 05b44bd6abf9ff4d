//! YAML deployment-task storage.
//!
//! This module provides durable records of deployment tasks rendered from
//! reusable YAML templates: creation with engine-assigned identity,
//! partial update and delete with affected-row reporting, identity lookup
//! with a typed missing-row error, and template-lineage queries. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
