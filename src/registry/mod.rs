//! Cluster registry bootstrap.
//!
//! This module keeps a consistent, de-duplicated view of the clusters a
//! control plane knows about: descriptors are upserted by name at process
//! startup, so the registry is non-empty and stable across repeated
//! starts. Registration is idempotent and best-effort; a failing
//! descriptor never blocks the rest of the seed. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Built-in descriptor seed in [`seed`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod seed;
pub mod services;

#[cfg(test)]
mod tests;
