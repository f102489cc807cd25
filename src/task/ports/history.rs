//! Repository port for the append-only task history log.

use super::repository::RepositoryResult;
use crate::task::domain::{HistoryEntry, TaskId};
use async_trait::async_trait;

/// Task history persistence contract.
///
/// The log is append-only: entries are never updated, and removal happens
/// only as a cascade of task deletion.
#[async_trait]
pub trait TaskHistoryRepository: Send + Sync {
    /// Appends an entry to the log.
    async fn append(&self, entry: &HistoryEntry) -> RepositoryResult<()>;

    /// Returns all entries for the given task in append order.
    async fn list_for_task(&self, task_id: TaskId) -> RepositoryResult<Vec<HistoryEntry>>;

    /// Removes all entries for the given task, returning the number
    /// removed.
    async fn delete_for_task(&self, task_id: TaskId) -> RepositoryResult<usize>;
}
