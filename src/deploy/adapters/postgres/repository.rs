//! `PostgreSQL` repository implementation for YAML task storage.

use super::{
    models::{NewYamlTaskRow, YamlTaskChangeset, YamlTaskRow},
    schema::yaml_tasks,
};
use crate::deploy::{
    domain::{
        NewYamlTask, PersistedYamlTaskData, TaskName, TaskStatus, TemplateId, YamlTask, YamlTaskId,
        YamlTaskPatch,
    },
    ports::{YamlTaskRepository, YamlTaskRepositoryError, YamlTaskRepositoryResult},
};
use crate::storage::PgPool;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed YAML task repository.
#[derive(Debug, Clone)]
pub struct PostgresYamlTaskRepository {
    pool: PgPool,
}

impl PostgresYamlTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> YamlTaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> YamlTaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(YamlTaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(YamlTaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl YamlTaskRepository for PostgresYamlTaskRepository {
    async fn insert(&self, task: &NewYamlTask) -> YamlTaskRepositoryResult<YamlTask> {
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(yaml_tasks::table)
                .values(&new_row)
                .returning(YamlTaskRow::as_returning())
                .get_result::<YamlTaskRow>(connection)
                .map_err(YamlTaskRepositoryError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, patch: &YamlTaskPatch) -> YamlTaskRepositoryResult<u64> {
        let task_id = patch.id().value();
        let changeset = to_changeset(patch);

        self.run_blocking(move |connection| {
            let affected = diesel::update(yaml_tasks::table.filter(yaml_tasks::id.eq(task_id)))
                .set(&changeset)
                .execute(connection)
                .map_err(YamlTaskRepositoryError::persistence)?;
            u64::try_from(affected).map_err(YamlTaskRepositoryError::persistence)
        })
        .await
    }

    async fn delete(&self, id: YamlTaskId) -> YamlTaskRepositoryResult<u64> {
        let task_id = id.value();

        self.run_blocking(move |connection| {
            let affected = diesel::delete(yaml_tasks::table.filter(yaml_tasks::id.eq(task_id)))
                .execute(connection)
                .map_err(YamlTaskRepositoryError::persistence)?;
            u64::try_from(affected).map_err(YamlTaskRepositoryError::persistence)
        })
        .await
    }

    async fn find_by_id(&self, id: YamlTaskId) -> YamlTaskRepositoryResult<Option<YamlTask>> {
        let task_id = id.value();

        self.run_blocking(move |connection| {
            let row = yaml_tasks::table
                .filter(yaml_tasks::id.eq(task_id))
                .select(YamlTaskRow::as_select())
                .first::<YamlTaskRow>(connection)
                .optional()
                .map_err(YamlTaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_by_template(
        &self,
        template_id: TemplateId,
    ) -> YamlTaskRepositoryResult<Vec<YamlTask>> {
        let template = template_id.value();

        self.run_blocking(move |connection| {
            let rows = yaml_tasks::table
                .filter(yaml_tasks::template_id.eq(template))
                .select(YamlTaskRow::as_select())
                .load::<YamlTaskRow>(connection)
                .map_err(YamlTaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_all(&self) -> YamlTaskRepositoryResult<Vec<YamlTask>> {
        self.run_blocking(move |connection| {
            let rows = yaml_tasks::table
                .select(YamlTaskRow::as_select())
                .load::<YamlTaskRow>(connection)
                .map_err(YamlTaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

fn to_new_row(task: &NewYamlTask) -> NewYamlTaskRow {
    NewYamlTaskRow {
        template_id: task.template_id().value(),
        name: task.name().as_str().to_owned(),
        content: task.content().to_owned(),
        status: task.status().as_str().to_owned(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn to_changeset(patch: &YamlTaskPatch) -> YamlTaskChangeset {
    YamlTaskChangeset {
        template_id: patch.template_id().map(TemplateId::value),
        name: patch.name().map(|name| name.as_str().to_owned()),
        content: patch.content().map(str::to_owned),
        status: patch.status().map(|status| status.as_str().to_owned()),
        updated_at: patch.updated_at(),
    }
}

fn row_to_task(row: YamlTaskRow) -> YamlTaskRepositoryResult<YamlTask> {
    let YamlTaskRow {
        id,
        template_id,
        name,
        content,
        status,
        created_at,
        updated_at,
    } = row;

    let data = PersistedYamlTaskData {
        id: YamlTaskId::new(id).map_err(YamlTaskRepositoryError::persistence)?,
        template_id: TemplateId::new(template_id).map_err(YamlTaskRepositoryError::persistence)?,
        name: TaskName::new(name).map_err(YamlTaskRepositoryError::persistence)?,
        content,
        status: TaskStatus::try_from(status.as_str())
            .map_err(YamlTaskRepositoryError::persistence)?,
        created_at,
        updated_at,
    };
    Ok(YamlTask::from_persisted(data))
}
