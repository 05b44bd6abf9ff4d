//! In-memory repository for YAML task storage.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::deploy::{
    domain::{NewYamlTask, TemplateId, YamlTask, YamlTaskId, YamlTaskPatch},
    ports::{YamlTaskRepository, YamlTaskRepositoryError, YamlTaskRepositoryResult},
};

/// Thread-safe in-memory YAML task repository.
///
/// Identifiers are assigned monotonically starting at 1; iteration order
/// is ascending id, matching a serial-keyed table's natural order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryYamlTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug)]
struct InMemoryTaskState {
    tasks: BTreeMap<YamlTaskId, YamlTask>,
    next_id: i64,
}

impl Default for InMemoryTaskState {
    fn default() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryYamlTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> YamlTaskRepositoryError {
    YamlTaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl YamlTaskRepository for InMemoryYamlTaskRepository {
    async fn insert(&self, task: &NewYamlTask) -> YamlTaskRepositoryResult<YamlTask> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let id = YamlTaskId::new(state.next_id).map_err(YamlTaskRepositoryError::persistence)?;
        state.next_id += 1;

        let stored = task.clone().into_persisted(id);
        state.tasks.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, patch: &YamlTaskPatch) -> YamlTaskRepositoryResult<u64> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        match state.tasks.get_mut(&patch.id()) {
            Some(task) => {
                task.apply(patch);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: YamlTaskId) -> YamlTaskRepositoryResult<u64> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        Ok(u64::from(state.tasks.remove(&id).is_some()))
    }

    async fn find_by_id(&self, id: YamlTaskId) -> YamlTaskRepositoryResult<Option<YamlTask>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_by_template(
        &self,
        template_id: TemplateId,
    ) -> YamlTaskRepositoryResult<Vec<YamlTask>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.template_id() == template_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> YamlTaskRepositoryResult<Vec<YamlTask>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.values().cloned().collect())
    }
}
