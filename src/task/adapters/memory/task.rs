//! In-memory task repository for tests and examples.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{CategoryId, OwnerId, Task, TaskId},
    ports::{RepositoryError, RepositoryResult, TaskRepository},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> RepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(lock_error)?;
        if tasks.contains_key(&task.id()) {
            return Err(RepositoryError::DuplicateTask(task.id()));
        }
        tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> RepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(lock_error)?;
        if !tasks.contains_key(&task.id()) {
            return Err(RepositoryError::TaskNotFound(task.id()));
        }
        tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, owner: OwnerId, id: TaskId) -> RepositoryResult<Option<Task>> {
        let tasks = self.tasks.read().map_err(lock_error)?;
        Ok(tasks
            .get(&id)
            .filter(|task| task.owner() == owner)
            .cloned())
    }

    async fn list_by_owner(&self, owner: OwnerId) -> RepositoryResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(lock_error)?;
        let mut owned: Vec<Task> = tasks
            .values()
            .filter(|task| task.owner() == owner)
            .cloned()
            .collect();
        owned.sort_by_key(|task| (task.created_at(), task.id().into_inner()));
        Ok(owned)
    }

    async fn delete(&self, id: TaskId) -> RepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(lock_error)?;
        if tasks.remove(&id).is_none() {
            return Err(RepositoryError::TaskNotFound(id));
        }
        Ok(())
    }

    async fn detach_category(&self, category: CategoryId) -> RepositoryResult<usize> {
        let mut tasks = self.tasks.write().map_err(lock_error)?;
        let mut detached = 0;
        for task in tasks.values_mut() {
            if task.category() == Some(category) {
                task.detach_category();
                detached += 1;
            }
        }
        Ok(detached)
    }
}
