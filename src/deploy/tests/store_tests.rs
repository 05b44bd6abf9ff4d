//! Service orchestration tests for YAML task storage.

use std::sync::Arc;

use crate::deploy::{
    adapters::memory::InMemoryYamlTaskRepository,
    domain::{
        NewYamlTask, TaskDomainError, TaskStatus, TemplateId, YamlTask, YamlTaskId, YamlTaskPatch,
    },
    ports::{YamlTaskRepository, YamlTaskRepositoryError, YamlTaskRepositoryResult},
    services::{CreateYamlTaskRequest, UpdateYamlTaskRequest, YamlTaskStore, YamlTaskStoreError},
};
use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestStore = YamlTaskStore<InMemoryYamlTaskRepository, DefaultClock>;

#[fixture]
fn store() -> TestStore {
    YamlTaskStore::new(
        Arc::new(InMemoryYamlTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

mockall::mock! {
    TaskRepo {}

    #[async_trait]
    impl YamlTaskRepository for TaskRepo {
        async fn insert(&self, task: &NewYamlTask) -> YamlTaskRepositoryResult<YamlTask>;
        async fn update(&self, patch: &YamlTaskPatch) -> YamlTaskRepositoryResult<u64>;
        async fn delete(&self, id: YamlTaskId) -> YamlTaskRepositoryResult<u64>;
        async fn find_by_id(&self, id: YamlTaskId) -> YamlTaskRepositoryResult<Option<YamlTask>>;
        async fn find_by_template(
            &self,
            template_id: TemplateId,
        ) -> YamlTaskRepositoryResult<Vec<YamlTask>>;
        async fn list_all(&self) -> YamlTaskRepositoryResult<Vec<YamlTask>>;
    }
}

fn backend_failure() -> YamlTaskRepositoryError {
    YamlTaskRepositoryError::persistence(std::io::Error::other("connection refused"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_sequential_ids_starting_at_one(store: TestStore) {
    let first = store
        .create(CreateYamlTaskRequest::new(7, "deploy-a"))
        .await
        .expect("first create should succeed");
    let second = store
        .create(CreateYamlTaskRequest::new(7, "deploy-b"))
        .await
        .expect("second create should succeed");

    assert_eq!(first.id().value(), 1);
    assert_eq!(second.id().value(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_is_retrievable_with_caller_fields(store: TestStore) {
    let created = store
        .create(
            CreateYamlTaskRequest::new(7, "deploy-a")
                .with_content("kind: Deployment")
                .with_status(TaskStatus::Pending),
        )
        .await
        .expect("create should succeed");

    let fetched = store
        .get_by_id(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, created);
    assert_eq!(fetched.template_id().value(), 7);
    assert_eq!(fetched.name().as_str(), "deploy-a");
    assert_eq!(fetched.content(), "kind: Deployment");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_invalid_template_reference(store: TestStore) {
    let result = store.create(CreateYamlTaskRequest::new(0, "deploy-a")).await;

    assert!(matches!(
        result,
        Err(YamlTaskStoreError::Domain(
            TaskDomainError::InvalidTemplateId(0)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_missing_id_is_a_non_error_noop(store: TestStore) {
    let affected = store
        .update(UpdateYamlTaskRequest::new(99).with_name("renamed"))
        .await
        .expect("update should not error on a missing id");

    assert_eq!(affected, 0);
    let all = store.list_all().await.expect("list should succeed");
    assert!(all.is_empty(), "no row may appear from a zero-row update");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rewrites_named_fields_only(store: TestStore) {
    let created = store
        .create(CreateYamlTaskRequest::new(7, "deploy-a").with_content("kind: Deployment"))
        .await
        .expect("create should succeed");

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
    assert_eq!(fetched.content(), "kind: Deployment");
    assert_eq!(fetched.status(), TaskStatus::Pending);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_then_lookup_yields_not_found(store: TestStore) {
    let created = store
        .create(CreateYamlTaskRequest::new(7, "deploy-a"))
        .await
        .expect("create should succeed");

    let affected = store
        .delete(created.id())
        .await
        .expect("delete should succeed");
    assert_eq!(affected, 1);

    let result = store.get_by_id(created.id()).await;
    assert!(matches!(
        result,
        Err(YamlTaskStoreError::NotFound { id }) if id == created.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_of_missing_id_is_a_non_error_noop(store: TestStore) {
    let id = YamlTaskId::new(42).expect("valid task id");
    let affected = store
        .delete(id)
        .await
        .expect("delete should not error on a missing id");
    assert_eq!(affected, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_template_lineage_is_not_an_error(store: TestStore) {
    let template_id = TemplateId::new(7).expect("valid template id");
    let tasks = store
        .get_by_template(template_id)
        .await
        .expect("lineage lookup should succeed");
    assert!(tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn template_lineage_returns_only_matching_tasks(store: TestStore) {
    let matching = store
        .create(CreateYamlTaskRequest::new(7, "deploy-a"))
        .await
        .expect("create should succeed");
    store
        .create(CreateYamlTaskRequest::new(8, "deploy-b"))
        .await
        .expect("create should succeed");

    let template_id = TemplateId::new(7).expect("valid template id");
    let tasks = store
        .get_by_template(template_id)
        .await
        .expect("lineage lookup should succeed");

    assert_eq!(tasks, vec![matching]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repository_failures_propagate_unchanged() {
    let mut repository = MockTaskRepo::new();
    repository
        .expect_list_all()
        .returning(|| Err(backend_failure()));

    let store = YamlTaskStore::new(Arc::new(repository), Arc::new(DefaultClock));
    let result = store.list_all().await;

    assert!(matches!(
        result,
        Err(YamlTaskStoreError::Repository(
            YamlTaskRepositoryError::Persistence(_)
        ))
    ));
}
