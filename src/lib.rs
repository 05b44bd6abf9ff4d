//! Stevedore: persistence and bootstrap core for Kubernetes control planes.
//!
//! This crate provides the durable-state layer behind a cluster control
//! plane: records of YAML deployment tasks rendered from reusable
//! templates, and an idempotent registry of known clusters seeded at
//! process startup. Transport handlers, template rendering, and
//! Kubernetes API access are external collaborators that call into this
//! crate and receive domain objects or typed failures back.
//!
//! # Architecture
//!
//! Stevedore follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`deploy`]: YAML deployment-task storage and lineage queries
//! - [`registry`]: Idempotent cluster-registry bootstrap
//! - [`storage`]: Shared `PostgreSQL` engine plumbing

pub mod deploy;
pub mod registry;
pub mod storage;
