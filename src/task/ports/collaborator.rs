//! Repository port for collaborator pairings.

use super::repository::RepositoryResult;
use crate::task::domain::{Collaborator, TaskId};
use async_trait::async_trait;

/// Collaborator persistence contract.
#[async_trait]
pub trait CollaboratorRepository: Send + Sync {
    /// Records a collaborator pairing.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::DuplicateCollaborator`] when the
    /// `(task, user)` pairing is already recorded.
    async fn add(&self, collaborator: &Collaborator) -> RepositoryResult<()>;

    /// Returns all collaborator pairings for the given task.
    async fn list_for_task(&self, task_id: TaskId) -> RepositoryResult<Vec<Collaborator>>;

    /// Removes all pairings for the given task, returning the number
    /// removed.
    async fn delete_for_task(&self, task_id: TaskId) -> RepositoryResult<usize>;
}
