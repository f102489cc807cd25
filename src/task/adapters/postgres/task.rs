//! `PostgreSQL` repository implementation for task storage.

use super::{
    blocking::{PgPool, run_blocking},
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{
        CategoryId, OwnerId, PersistedTaskData, Priority, RecurrenceInterval, Task, TaskId,
        TaskStatus, Title,
    },
    ports::{RepositoryError, RepositoryResult, TaskRepository},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> RepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        RepositoryError::DuplicateTask(task_id)
                    }
                    _ => RepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> RepositoryResult<()> {
        let task_id = task.id();
        let row = to_new_row(task);

        run_blocking(&self.pool, move |connection| {
            let updated_count =
                diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                    .set((
                        tasks::title.eq(&row.title),
                        tasks::description.eq(&row.description),
                        tasks::due_date.eq(row.due_date),
                        tasks::priority.eq(&row.priority),
                        tasks::status.eq(&row.status),
                        tasks::completed_at.eq(row.completed_at),
                        tasks::category_id.eq(row.category_id),
                        tasks::is_recurring.eq(row.is_recurring),
                        tasks::recurrence_interval.eq(&row.recurrence_interval),
                        tasks::updated_at.eq(row.updated_at),
                    ))
                    .execute(connection)
                    .map_err(RepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(RepositoryError::TaskNotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, owner: OwnerId, id: TaskId) -> RepositoryResult<Option<Task>> {
        run_blocking(&self.pool, move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .filter(tasks::owner_id.eq(owner.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_by_owner(&self, owner: OwnerId) -> RepositoryResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            let rows = tasks::table
                .filter(tasks::owner_id.eq(owner.into_inner()))
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> RepositoryResult<()> {
        run_blocking(&self.pool, move |connection| {
            let deleted_count =
                diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(RepositoryError::persistence)?;
            if deleted_count == 0 {
                return Err(RepositoryError::TaskNotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn detach_category(&self, category: CategoryId) -> RepositoryResult<usize> {
        run_blocking(&self.pool, move |connection| {
            diesel::update(tasks::table.filter(tasks::category_id.eq(category.into_inner())))
                .set(tasks::category_id.eq(None::<uuid::Uuid>))
                .execute(connection)
                .map_err(RepositoryError::persistence)
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        owner_id: task.owner().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().to_owned(),
        due_date: task.due_date(),
        priority: task.priority().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        completed_at: task.completed_at(),
        category_id: task.category().map(CategoryId::into_inner),
        is_recurring: task.is_recurring(),
        recurrence_interval: task
            .recurrence_interval()
            .map(|interval| interval.as_str().to_owned()),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> RepositoryResult<Task> {
    let title = Title::new(row.title).map_err(RepositoryError::persistence)?;
    let priority =
        Priority::try_from(row.priority.as_str()).map_err(RepositoryError::persistence)?;
    let status =
        TaskStatus::try_from(row.status.as_str()).map_err(RepositoryError::persistence)?;
    let recurrence_interval = row
        .recurrence_interval
        .as_deref()
        .map(RecurrenceInterval::try_from)
        .transpose()
        .map_err(RepositoryError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        owner: OwnerId::from_uuid(row.owner_id),
        title,
        description: row.description,
        due_date: row.due_date,
        priority,
        status,
        completed_at: row.completed_at,
        category: row.category_id.map(CategoryId::from_uuid),
        recurring: row.is_recurring,
        recurrence_interval,
        created_at: row.created_at,
        updated_at: row.updated_at,
    };
    Ok(Task::from_persisted(data))
}
