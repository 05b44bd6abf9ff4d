//! `PostgreSQL` adapters for cluster registry persistence.

mod models;
mod repository;
mod schema;

pub use repository::PostgresClusterRepository;
