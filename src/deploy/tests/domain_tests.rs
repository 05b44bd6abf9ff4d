//! Domain-focused tests for YAML task types and partial updates.

use crate::deploy::domain::{
    NewYamlTask, TaskDomainError, TaskName, TaskStatus, TemplateId, YamlTaskId, YamlTaskPatch,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
fn task_id_accepts_positive_values() {
    let id = YamlTaskId::new(42).expect("valid task id");
    assert_eq!(id.value(), 42);
}

#[rstest]
#[case(0)]
#[case(-7)]
fn task_id_rejects_non_positive_values(#[case] value: i64) {
    assert_eq!(
        YamlTaskId::new(value),
        Err(TaskDomainError::InvalidTaskId(value))
    );
}

#[rstest]
#[case(0)]
#[case(-1)]
fn template_id_rejects_non_positive_values(#[case] value: i64) {
    assert_eq!(
        TemplateId::new(value),
        Err(TaskDomainError::InvalidTemplateId(value))
    );
}

#[rstest]
fn task_name_trims_surrounding_whitespace() {
    let name = TaskName::new("  deploy-a  ").expect("valid task name");
    assert_eq!(name.as_str(), "deploy-a");
}

#[rstest]
fn task_name_rejects_empty_input() {
    assert_eq!(TaskName::new("   "), Err(TaskDomainError::EmptyTaskName));
}

#[rstest]
fn task_name_rejects_overlong_input() {
    let long = "a".repeat(256);
    assert_eq!(
        TaskName::new(long.clone()),
        Err(TaskDomainError::TaskNameTooLong(long))
    );
}

#[rstest]
#[case(TaskStatus::Pending, "pending")]
#[case(TaskStatus::Succeeded, "succeeded")]
#[case(TaskStatus::Failed, "failed")]
fn task_status_round_trips_through_storage_form(#[case] status: TaskStatus, #[case] text: &str) {
    assert_eq!(status.as_str(), text);
    assert_eq!(TaskStatus::try_from(text), Ok(status));
}

#[rstest]
fn task_status_parse_normalises_case_and_whitespace() {
    assert_eq!(TaskStatus::try_from(" Pending "), Ok(TaskStatus::Pending));
}

#[rstest]
fn task_status_parse_rejects_unknown_values() {
    assert!(TaskStatus::try_from("archived").is_err());
}

#[rstest]
fn new_task_defaults_to_pending_with_equal_timestamps(clock: DefaultClock) {
    let template_id = TemplateId::new(7).expect("valid template id");
    let name = TaskName::new("deploy-a").expect("valid task name");
    let task = NewYamlTask::new(template_id, name, "kind: Deployment", &clock);

    assert_eq!(task.status(), TaskStatus::Pending);
    assert_eq!(task.created_at(), task.updated_at());
    assert_eq!(task.content(), "kind: Deployment");
}

#[rstest]
fn into_persisted_carries_all_caller_fields(clock: DefaultClock) {
    let template_id = TemplateId::new(7).expect("valid template id");
    let name = TaskName::new("deploy-a").expect("valid task name");
    let draft = NewYamlTask::new(template_id, name.clone(), "kind: Service", &clock)
        .with_status(TaskStatus::Failed);
    let id = YamlTaskId::new(3).expect("valid task id");

    let task = draft.clone().into_persisted(id);

    assert_eq!(task.id(), id);
    assert_eq!(task.template_id(), template_id);
    assert_eq!(task.name(), &name);
    assert_eq!(task.content(), "kind: Service");
    assert_eq!(task.status(), TaskStatus::Failed);
    assert_eq!(task.created_at(), draft.created_at());
}

#[rstest]
fn apply_overwrites_only_patched_fields(clock: DefaultClock) {
    let template_id = TemplateId::new(7).expect("valid template id");
    let name = TaskName::new("deploy-a").expect("valid task name");
    let id = YamlTaskId::new(1).expect("valid task id");
    let mut task =
        NewYamlTask::new(template_id, name, "kind: Deployment", &clock).into_persisted(id);

    let new_name = TaskName::new("deploy-a-v2").expect("valid task name");
    let patch = YamlTaskPatch::new(id, &clock).with_name(new_name.clone());
    task.apply(&patch);

    assert_eq!(task.name(), &new_name);
    assert_eq!(task.template_id(), template_id);
    assert_eq!(task.content(), "kind: Deployment");
    assert_eq!(task.status(), TaskStatus::Pending);
    assert_eq!(task.updated_at(), patch.updated_at());
}

#[rstest]
fn empty_patch_reports_noop_but_still_touches(clock: DefaultClock) {
    let id = YamlTaskId::new(1).expect("valid task id");
    let patch = YamlTaskPatch::new(id, &clock);
    assert!(patch.is_noop());

    let populated = patch.with_status(TaskStatus::Succeeded);
    assert!(!populated.is_noop());
}
