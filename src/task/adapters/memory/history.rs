//! In-memory history log for tests and examples.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{HistoryEntry, TaskId},
    ports::{RepositoryError, RepositoryResult, TaskHistoryRepository},
};

/// Thread-safe in-memory task history log.
///
/// Entries are kept per task in append order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskHistoryRepository {
    entries: Arc<RwLock<HashMap<TaskId, Vec<HistoryEntry>>>>,
}

impl InMemoryTaskHistoryRepository {
    /// Creates an empty in-memory log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskHistoryRepository for InMemoryTaskHistoryRepository {
    async fn append(&self, entry: &HistoryEntry) -> RepositoryResult<()> {
        let mut entries = self.entries.write().map_err(lock_error)?;
        entries
            .entry(entry.task_id())
            .or_default()
            .push(entry.clone());
        Ok(())
    }

    async fn list_for_task(&self, task_id: TaskId) -> RepositoryResult<Vec<HistoryEntry>> {
        let entries = self.entries.read().map_err(lock_error)?;
        Ok(entries.get(&task_id).cloned().unwrap_or_default())
    }

    async fn delete_for_task(&self, task_id: TaskId) -> RepositoryResult<usize> {
        let mut entries = self.entries.write().map_err(lock_error)?;
        Ok(entries.remove(&task_id).map_or(0, |removed| removed.len()))
    }
}
