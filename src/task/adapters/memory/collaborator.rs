//! In-memory collaborator repository for tests and examples.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Collaborator, TaskId},
    ports::{CollaboratorRepository, RepositoryError, RepositoryResult},
};

/// Thread-safe in-memory collaborator repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCollaboratorRepository {
    pairings: Arc<RwLock<HashMap<TaskId, Vec<Collaborator>>>>,
}

impl InMemoryCollaboratorRepository {
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
impl CollaboratorRepository for InMemoryCollaboratorRepository {
    async fn add(&self, collaborator: &Collaborator) -> RepositoryResult<()> {
        let mut pairings = self.pairings.write().map_err(lock_error)?;
        let for_task = pairings.entry(collaborator.task_id()).or_default();
        if for_task
            .iter()
            .any(|existing| existing.user() == collaborator.user())
        {
            return Err(RepositoryError::DuplicateCollaborator {
                task_id: collaborator.task_id(),
                user: collaborator.user(),
            });
        }
        for_task.push(collaborator.clone());
        Ok(())
    }

    async fn list_for_task(&self, task_id: TaskId) -> RepositoryResult<Vec<Collaborator>> {
        let pairings = self.pairings.read().map_err(lock_error)?;
        Ok(pairings.get(&task_id).cloned().unwrap_or_default())
    }

    async fn delete_for_task(&self, task_id: TaskId) -> RepositoryResult<usize> {
        let mut pairings = self.pairings.write().map_err(lock_error)?;
        Ok(pairings.remove(&task_id).map_or(0, |removed| removed.len()))
    }
}
