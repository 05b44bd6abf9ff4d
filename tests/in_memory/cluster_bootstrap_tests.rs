//! In-memory integration tests for cluster registry seeding.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::rstest;
use stevedore::registry::{
    adapters::memory::InMemoryClusterRepository,
    domain::{ClusterDescriptor, ClusterName, Kubeconfig, ResourceHints},
    ports::ClusterRepository,
    seed,
    services::ClusterRegistrar,
};

fn descriptor(name: &str) -> ClusterDescriptor {
    ClusterDescriptor::new(
        ClusterName::new(name).expect("valid cluster name"),
        1,
        format!("https://api.{name}.example.com"),
        Kubeconfig::new("kind: Config"),
    )
    .with_environment("prod")
    .with_version("v1.32.0")
    .with_resources(ResourceHints {
        cpu_request: "100m".to_owned(),
        cpu_limit: "200m".to_owned(),
        memory_request: "256Mi".to_owned(),
        memory_limit: "512Mi".to_owned(),
    })
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeated_bootstrap_keeps_one_row_per_descriptor_name() {
    let repository = Arc::new(InMemoryClusterRepository::new());
    let registrar = ClusterRegistrar::new(
        Arc::clone(&repository),
        vec![descriptor("cluster-1")],
        Arc::new(DefaultClock),
    );

    registrar.bootstrap().await;
    let after_first = repository.list().await.expect("list should succeed");
    assert_eq!(after_first.len(), 1);

    registrar.bootstrap().await;
    let after_second = repository.list().await.expect("list should succeed");
    assert_eq!(after_second.len(), 1);
    assert_eq!(after_first, after_second);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeded_cluster_is_discoverable_by_name() {
    let repository = Arc::new(InMemoryClusterRepository::new());
    ClusterRegistrar::new(
        Arc::clone(&repository),
        vec![descriptor("cluster-1")],
        Arc::new(DefaultClock),
    )
    .bootstrap()
    .await;

    let name = ClusterName::new("cluster-1").expect("valid cluster name");
    let cluster = repository
        .find_by_name(&name)
        .await
        .expect("lookup should succeed")
        .expect("cluster should be registered");

    assert_eq!(cluster.name(), &name);
    assert_eq!(cluster.environment(), "prod");
    assert_eq!(cluster.api_server_address(), "https://api.cluster-1.example.com");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn credential_is_stored_as_a_separate_sub_entity() {
    let repository = Arc::new(InMemoryClusterRepository::new());
    let seeded = descriptor("cluster-1");
    ClusterRegistrar::new(
        Arc::clone(&repository),
        vec![seeded.clone()],
        Arc::new(DefaultClock),
    )
    .bootstrap()
    .await;

    let name = ClusterName::new("cluster-1").expect("valid cluster name");
    let cluster = repository
        .find_by_name(&name)
        .await
        .expect("lookup should succeed")
        .expect("cluster should be registered");

    let credential = repository
        .credential(cluster.id())
        .await
        .expect("credential lookup should succeed")
        .expect("credential should be stored");
    assert_eq!(credential, *seeded.kubeconfig());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn default_seed_bootstraps_a_non_empty_registry() {
    let repository = Arc::new(InMemoryClusterRepository::new());
    let descriptors = seed::default_descriptors().expect("seed should validate");
    ClusterRegistrar::new(
        Arc::clone(&repository),
        descriptors,
        Arc::new(DefaultClock),
    )
    .bootstrap()
    .await;

    let clusters = repository.list().await.expect("list should succeed");
    assert_eq!(clusters.len(), 1);
    let cluster = clusters.first().expect("registry should not be empty");
    assert_eq!(cluster.name().as_str(), "cluster-1");
    assert_eq!(cluster.id().value(), 1);
}
