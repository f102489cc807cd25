//! Repository port for category persistence.

use super::repository::RepositoryResult;
use crate::task::domain::{Category, CategoryId, OwnerId};
use async_trait::async_trait;

/// Category persistence contract.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Stores a new category.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::DuplicateCategory`] when the
    /// category ID already exists.
    async fn store(&self, category: &Category) -> RepositoryResult<()>;

    /// Finds a category by identifier, scoped to the given owner.
    ///
    /// Returns `None` when the category does not exist or belongs to
    /// another owner.
    async fn find_by_id(
        &self,
        owner: OwnerId,
        id: CategoryId,
    ) -> RepositoryResult<Option<Category>>;

    /// Returns all categories belonging to the given owner.
    async fn list_by_owner(&self, owner: OwnerId) -> RepositoryResult<Vec<Category>>;

    /// Removes a category record.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::CategoryNotFound`] when the
    /// category does not exist.
    async fn delete(&self, id: CategoryId) -> RepositoryResult<()>;
}
