//! `PostgreSQL` adapters for YAML task persistence.

mod models;
mod repository;
mod schema;

pub use repository::PostgresYamlTaskRepository;
