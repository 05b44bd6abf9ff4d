//! In-memory integration tests for the YAML task store.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use stevedore::deploy::{
    adapters::memory::InMemoryYamlTaskRepository,
    domain::{TemplateId, YamlTaskId},
    services::{CreateYamlTaskRequest, UpdateYamlTaskRequest, YamlTaskStore, YamlTaskStoreError},
};

type TestStore = YamlTaskStore<InMemoryYamlTaskRepository, DefaultClock>;

#[fixture]
fn store() -> TestStore {
    YamlTaskStore::new(
        Arc::new(InMemoryYamlTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Asserts exactly one task is found with the expected ID.
///
/// # Errors
///
/// Returns an error if the result set does not contain exactly one task
/// matching `expected_id`.
fn assert_single_task_found(
    found: &[stevedore::deploy::domain::YamlTask],
    expected_id: YamlTaskId,
) -> Result<(), eyre::Report> {
    eyre::ensure!(
        found.len() == 1,
        "expected exactly one task, found {}",
        found.len()
    );
    let task = found
        .first()
        .ok_or_else(|| eyre::eyre!("expected at least one task"))?;
    eyre::ensure!(task.id() == expected_id, "task ID mismatch");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_lifecycle_from_creation_to_deletion(store: TestStore) -> Result<(), eyre::Report> {
    let created = store
        .create(CreateYamlTaskRequest::new(7, "deploy-a").with_content("kind: Deployment"))
        .await
        .expect("task creation should succeed");
    assert_eq!(created.id().value(), 1);

    let template_id = TemplateId::new(7).expect("valid template id");
    let lineage = store
        .get_by_template(template_id)
        .await
        .expect("lineage lookup should succeed");
    assert_single_task_found(&lineage, created.id())?;

    let affected = store
        .update(UpdateYamlTaskRequest::new(created.id().value()).with_name("deploy-a-v2"))
        .await
        .expect("update should succeed");
    assert_eq!(affected, 1);

    let fetched = store
        .get_by_id(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched.name().as_str(), "deploy-a-v2");

    let deleted = store
        .delete(created.id())
        .await
        .expect("delete should succeed");
    assert_eq!(deleted, 1);

    let missing = store.get_by_id(created.id()).await;
    assert!(matches!(
        missing,
        Err(YamlTaskStoreError::NotFound { id }) if id == created.id()
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_all_returns_every_stored_task(store: TestStore) {
    store
        .create(CreateYamlTaskRequest::new(7, "deploy-a"))
        .await
        .expect("first create should succeed");
    store
        .create(CreateYamlTaskRequest::new(8, "deploy-b"))
        .await
        .expect("second create should succeed");

    let all = store.list_all().await.expect("list should succeed");
    assert_eq!(all.len(), 2);

    let names: Vec<_> = all.iter().map(|task| task.name().as_str()).collect();
    assert_eq!(names, vec!["deploy-a", "deploy-b"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn zero_row_update_is_success_and_leaves_store_empty(store: TestStore) {
    let affected = store
        .update(UpdateYamlTaskRequest::new(1).with_name("ghost"))
        .await
        .expect("update of a missing id should not error");
    assert_eq!(affected, 0);

    let all = store.list_all().await.expect("list should succeed");
    assert!(all.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn template_with_no_tasks_yields_empty_lineage(store: TestStore) {
    store
        .create(CreateYamlTaskRequest::new(7, "deploy-a"))
        .await
        .expect("create should succeed");

    let unused_template = TemplateId::new(99).expect("valid template id");
    let lineage = store
        .get_by_template(unused_template)
        .await
        .expect("lineage lookup should succeed");
    assert!(lineage.is_empty());
}
