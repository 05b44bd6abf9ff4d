//! Shared `PostgreSQL` engine plumbing.
//!
//! Both feature modules persist through the same storage engine: a pooled
//! `PostgreSQL` connection manager. Adapters own their queries; this module
//! only provides the pool type and its construction.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};

/// Pooled `PostgreSQL` connection handle shared by all Postgres adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Builds a connection pool for the given database URL.
///
/// # Errors
///
/// Returns [`PoolError`] when the pool cannot be initialised, for example
/// when the URL is malformed or the first connection cannot be established.
pub fn build_pool(database_url: &str) -> Result<PgPool, PoolError> {
    Pool::builder().build(ConnectionManager::new(database_url))
}
