//! `PostgreSQL` repository implementation for category storage.

use super::{
    blocking::{PgPool, run_blocking},
    models::{CategoryRow, NewCategoryRow},
    schema::categories,
};
use crate::task::{
    domain::{Category, CategoryId, CategoryName, OwnerId},
    ports::{CategoryRepository, RepositoryError, RepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed category repository.
#[derive(Debug, Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn store(&self, category: &Category) -> RepositoryResult<()> {
        let category_id = category.id();
        let new_row = NewCategoryRow {
            id: category.id().into_inner(),
            owner_id: category.owner().into_inner(),
            name: category.name().as_str().to_owned(),
        };

        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(categories::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        RepositoryError::DuplicateCategory(category_id)
                    }
                    _ => RepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(
        &self,
        owner: OwnerId,
        id: CategoryId,
    ) -> RepositoryResult<Option<Category>> {
        run_blocking(&self.pool, move |connection| {
            let row = categories::table
                .filter(categories::id.eq(id.into_inner()))
                .filter(categories::owner_id.eq(owner.into_inner()))
                .select(CategoryRow::as_select())
                .first::<CategoryRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_category).transpose()
        })
        .await
    }

    async fn list_by_owner(&self, owner: OwnerId) -> RepositoryResult<Vec<Category>> {
        run_blocking(&self.pool, move |connection| {
            let rows = categories::table
                .filter(categories::owner_id.eq(owner.into_inner()))
                .order(categories::id.asc())
                .select(CategoryRow::as_select())
                .load::<CategoryRow>(connection)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter().map(row_to_category).collect()
        })
        .await
    }

    async fn delete(&self, id: CategoryId) -> RepositoryResult<()> {
        run_blocking(&self.pool, move |connection| {
            let deleted_count =
                diesel::delete(categories::table.filter(categories::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(RepositoryError::persistence)?;
            if deleted_count == 0 {
                return Err(RepositoryError::CategoryNotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn row_to_category(row: CategoryRow) -> RepositoryResult<Category> {
    let name = CategoryName::new(row.name).map_err(RepositoryError::persistence)?;
    Ok(Category::from_persisted(
        CategoryId::from_uuid(row.id),
        OwnerId::from_uuid(row.owner_id),
        name,
    ))
}
