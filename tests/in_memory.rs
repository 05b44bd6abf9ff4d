//! In-memory repository integration tests.
//!
//! Tests are organized into modules by functionality:
//! - `task_store_tests`: Task CRUD, lineage queries, affected-row reporting
//! - `cluster_bootstrap_tests`: Idempotent cluster registry seeding

mod in_memory {
    mod cluster_bootstrap_tests;
    mod task_store_tests;
}
