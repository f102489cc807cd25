//! Repository port for task persistence and owner-scoped lookup.

use crate::task::domain::{CategoryId, OwnerId, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Task persistence contract.
///
/// Lookup operations are owner-scoped: a task owned by a different user is
/// indistinguishable from a missing task. Write operations address tasks by
/// identifier because callers are expected to have resolved ownership
/// through a scoped lookup first.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> RepositoryResult<()>;

    /// Persists changes to an existing task (fields, status, timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::TaskNotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> RepositoryResult<()>;

    /// Finds a task by identifier, scoped to the given owner.
    ///
    /// Returns `None` when the task does not exist or belongs to another
    /// owner.
    async fn find_by_id(&self, owner: OwnerId, id: TaskId) -> RepositoryResult<Option<Task>>;

    /// Returns all tasks belonging to the given owner, ordered by creation
    /// time.
    async fn list_by_owner(&self, owner: OwnerId) -> RepositoryResult<Vec<Task>>;

    /// Removes a task record.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::TaskNotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: TaskId) -> RepositoryResult<()>;

    /// Clears the category reference on every task pointing at the given
    /// category, returning the number of tasks detached.
    async fn detach_category(&self, category: CategoryId) -> RepositoryResult<usize>;
}

/// Errors returned by persistence adapter implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// A category with the same identifier already exists.
    #[error("duplicate category identifier: {0}")]
    DuplicateCategory(CategoryId),

    /// The `(task, user)` pairing is already recorded.
    #[error("user {user} already collaborates on task {task_id}")]
    DuplicateCollaborator {
        /// Task half of the pairing.
        task_id: TaskId,
        /// User half of the pairing.
        user: OwnerId,
    },

    /// The task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The category was not found.
    #[error("category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
