//! `PostgreSQL` repository implementation for the cluster registry.

use super::{
    models::{ClusterRow, NewClusterCredentialRow, NewClusterRow},
    schema::{cluster_credentials, clusters},
};
use crate::registry::{
    domain::{
        Cluster, ClusterDescriptor, ClusterId, ClusterName, Kubeconfig, PersistedClusterData,
        ResourceHints,
    },
    ports::{ClusterRepository, ClusterRepositoryError, ClusterRepositoryResult, RegisteredCluster},
};
use crate::storage::PgPool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::Error as DieselError;

/// `PostgreSQL`-backed cluster registry repository.
#[derive(Debug, Clone)]
pub struct PostgresClusterRepository {
    pool: PgPool,
}

impl PostgresClusterRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ClusterRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ClusterRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ClusterRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ClusterRepositoryError::persistence)?
    }
}

#[async_trait]
impl ClusterRepository for PostgresClusterRepository {
    async fn find_or_create(
        &self,
        descriptor: &ClusterDescriptor,
        registered_at: DateTime<Utc>,
    ) -> ClusterRepositoryResult<RegisteredCluster> {
        let new_row = to_new_row(descriptor, registered_at)?;
        let kubeconfig = descriptor.kubeconfig().expose().to_owned();
        let lookup_name = descriptor.name().clone();

        self.run_blocking(move |connection| {
            // ON CONFLICT DO NOTHING makes the registration race-free
            // against concurrent writers; the credential row rides in the
            // same transaction and only exists for freshly created rows.
            let inserted = connection
                .transaction::<Option<ClusterRow>, DieselError, _>(|txn| {
                    let row = diesel::insert_into(clusters::table)
                        .values(&new_row)
                        .on_conflict(clusters::name)
                        .do_nothing()
                        .returning(ClusterRow::as_returning())
                        .get_result::<ClusterRow>(txn)
                        .optional()?;

                    if let Some(cluster_row) = &row {
                        diesel::insert_into(cluster_credentials::table)
                            .values(&NewClusterCredentialRow {
                                cluster_id: cluster_row.id,
                                kubeconfig,
                            })
                            .on_conflict_do_nothing()
                            .execute(txn)?;
                    }
                    Ok(row)
                })
                .map_err(ClusterRepositoryError::persistence)?;

            match inserted {
                Some(row) => Ok(RegisteredCluster::Created(row_to_cluster(row)?)),
                None => {
                    let existing =
                        find_cluster_by_name(connection, &lookup_name)?.ok_or_else(|| {
                            ClusterRepositoryError::persistence(std::io::Error::other(
                                "cluster row missing after name conflict",
                            ))
                        })?;
                    Ok(RegisteredCluster::Existing(existing))
                }
            }
        })
        .await
    }

    async fn find_by_name(&self, name: &ClusterName) -> ClusterRepositoryResult<Option<Cluster>> {
        let lookup_name = name.clone();
        self.run_blocking(move |connection| find_cluster_by_name(connection, &lookup_name))
            .await
    }

    async fn list(&self) -> ClusterRepositoryResult<Vec<Cluster>> {
        self.run_blocking(move |connection| {
            let rows = clusters::table
                .select(ClusterRow::as_select())
                .load::<ClusterRow>(connection)
                .map_err(ClusterRepositoryError::persistence)?;
            rows.into_iter().map(row_to_cluster).collect()
        })
        .await
    }

    async fn credential(&self, id: ClusterId) -> ClusterRepositoryResult<Option<Kubeconfig>> {
        let cluster_id = id.value();
        self.run_blocking(move |connection| {
            let content = cluster_credentials::table
                .filter(cluster_credentials::cluster_id.eq(cluster_id))
                .select(cluster_credentials::kubeconfig)
                .first::<String>(connection)
                .optional()
                .map_err(ClusterRepositoryError::persistence)?;
            Ok(content.map(Kubeconfig::new))
        })
        .await
    }
}

fn to_new_row(
    descriptor: &ClusterDescriptor,
    registered_at: DateTime<Utc>,
) -> ClusterRepositoryResult<NewClusterRow> {
    let action_timeout_seconds = i32::try_from(descriptor.action_timeout_seconds())
        .map_err(ClusterRepositoryError::persistence)?;

    Ok(NewClusterRow {
        name: descriptor.name().as_str().to_owned(),
        name_localized: descriptor.name_localized().to_owned(),
        owner_id: descriptor.owner_id(),
        cpu_request: descriptor.resources().cpu_request.clone(),
        cpu_limit: descriptor.resources().cpu_limit.clone(),
        memory_request: descriptor.resources().memory_request.clone(),
        memory_limit: descriptor.resources().memory_limit.clone(),
        environment: descriptor.environment().to_owned(),
        version: descriptor.version().to_owned(),
        api_server_address: descriptor.api_server_address().to_owned(),
        action_timeout_seconds,
        created_at: registered_at,
        updated_at: registered_at,
    })
}

fn row_to_cluster(row: ClusterRow) -> ClusterRepositoryResult<Cluster> {
    let ClusterRow {
        id,
        name,
        name_localized,
        owner_id,
        cpu_request,
        cpu_limit,
        memory_request,
        memory_limit,
        environment,
        version,
        api_server_address,
        action_timeout_seconds,
        created_at,
        updated_at,
    } = row;

    let data = PersistedClusterData {
        id: ClusterId::new(id).map_err(ClusterRepositoryError::persistence)?,
        name: ClusterName::new(name).map_err(ClusterRepositoryError::persistence)?,
        name_localized,
        owner_id,
        resources: ResourceHints {
            cpu_request,
            cpu_limit,
            memory_request,
            memory_limit,
        },
        environment,
        version,
        api_server_address,
        action_timeout_seconds: u32::try_from(action_timeout_seconds)
            .map_err(ClusterRepositoryError::persistence)?,
        created_at,
        updated_at,
    };
    Ok(Cluster::from_persisted(data))
}

fn find_cluster_by_name(
    connection: &mut PgConnection,
    name: &ClusterName,
) -> ClusterRepositoryResult<Option<Cluster>> {
    let row = clusters::table
        .filter(clusters::name.eq(name.as_str()))
        .select(ClusterRow::as_select())
        .first::<ClusterRow>(connection)
        .optional()
        .map_err(ClusterRepositoryError::persistence)?;
    row.map(row_to_cluster).transpose()
}
