//! `PostgreSQL` repository implementation for collaborator pairings.

use super::{
    blocking::{PgPool, run_blocking},
    models::{CollaboratorRow, NewCollaboratorRow},
    schema::collaborators,
};
use crate::task::{
    domain::{Collaborator, CollaboratorId, OwnerId, TaskId},
    ports::{CollaboratorRepository, RepositoryError, RepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed collaborator repository.
///
/// Relies on a unique index over `(task_id, user_id)` to enforce pairing
/// uniqueness.
#[derive(Debug, Clone)]
pub struct PostgresCollaboratorRepository {
    pool: PgPool,
}

impl PostgresCollaboratorRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollaboratorRepository for PostgresCollaboratorRepository {
    async fn add(&self, collaborator: &Collaborator) -> RepositoryResult<()> {
        let task_id = collaborator.task_id();
        let user = collaborator.user();
        let new_row = NewCollaboratorRow {
            id: collaborator.id().into_inner(),
            task_id: task_id.into_inner(),
            user_id: user.into_inner(),
        };

        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(collaborators::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        RepositoryError::DuplicateCollaborator { task_id, user }
                    }
                    _ => RepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn list_for_task(&self, task_id: TaskId) -> RepositoryResult<Vec<Collaborator>> {
        run_blocking(&self.pool, move |connection| {
            let rows = collaborators::table
                .filter(collaborators::task_id.eq(task_id.into_inner()))
                .order(collaborators::id.asc())
                .select(CollaboratorRow::as_select())
                .load::<CollaboratorRow>(connection)
                .map_err(RepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_collaborator).collect())
        })
        .await
    }

    async fn delete_for_task(&self, task_id: TaskId) -> RepositoryResult<usize> {
        run_blocking(&self.pool, move |connection| {
            diesel::delete(
                collaborators::table.filter(collaborators::task_id.eq(task_id.into_inner())),
            )
            .execute(connection)
            .map_err(RepositoryError::persistence)
        })
        .await
    }
}

fn row_to_collaborator(row: CollaboratorRow) -> Collaborator {
    Collaborator::from_persisted(
        CollaboratorId::from_uuid(row.id),
        TaskId::from_uuid(row.task_id),
        OwnerId::from_uuid(row.user_id),
    )
}
