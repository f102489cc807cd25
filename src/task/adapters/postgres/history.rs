//! `PostgreSQL` repository implementation for the task history log.

use super::{
    blocking::{PgPool, run_blocking},
    models::{HistoryRow, NewHistoryRow},
    schema::task_history,
};
use crate::task::{
    domain::{HistoryEntry, HistoryEntryId, TaskId},
    ports::{RepositoryError, RepositoryResult, TaskHistoryRepository},
};
use async_trait::async_trait;
use diesel::prelude::*;

/// `PostgreSQL`-backed task history log.
#[derive(Debug, Clone)]
pub struct PostgresTaskHistoryRepository {
    pool: PgPool,
}

impl PostgresTaskHistoryRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskHistoryRepository for PostgresTaskHistoryRepository {
    async fn append(&self, entry: &HistoryEntry) -> RepositoryResult<()> {
        let new_row = NewHistoryRow {
            id: entry.id().into_inner(),
            task_id: entry.task_id().into_inner(),
            changed_at: entry.changed_at(),
            description: entry.description().to_owned(),
        };

        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(task_history::table)
                .values(&new_row)
                .execute(connection)
                .map_err(RepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn list_for_task(&self, task_id: TaskId) -> RepositoryResult<Vec<HistoryEntry>> {
        run_blocking(&self.pool, move |connection| {
            let rows = task_history::table
                .filter(task_history::task_id.eq(task_id.into_inner()))
                .order((task_history::changed_at.asc(), task_history::id.asc()))
                .select(HistoryRow::as_select())
                .load::<HistoryRow>(connection)
                .map_err(RepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_entry).collect())
        })
        .await
    }

    async fn delete_for_task(&self, task_id: TaskId) -> RepositoryResult<usize> {
        run_blocking(&self.pool, move |connection| {
            diesel::delete(
                task_history::table.filter(task_history::task_id.eq(task_id.into_inner())),
            )
            .execute(connection)
            .map_err(RepositoryError::persistence)
        })
        .await
    }
}

fn row_to_entry(row: HistoryRow) -> HistoryEntry {
    HistoryEntry::from_persisted(
        HistoryEntryId::from_uuid(row.id),
        TaskId::from_uuid(row.task_id),
        row.changed_at,
        row.description,
    )
}
