//! Service layer for category management.

use super::lifecycle::{TaskServiceError, TaskServiceResult};
use crate::task::{
    domain::{Category, CategoryId, CategoryName, OwnerId},
    ports::{CategoryRepository, TaskRepository},
};
use std::sync::Arc;

/// Category orchestration service.
///
/// Deleting a category detaches it from owning tasks; task records are
/// never deleted by a category cascade.
#[derive(Clone)]
pub struct CategoryService<G, R>
where
    G: CategoryRepository,
    R: TaskRepository,
{
    categories: Arc<G>,
    tasks: Arc<R>,
}

impl<G, R> CategoryService<G, R>
where
    G: CategoryRepository,
    R: TaskRepository,
{
    /// Creates a new category service.
    #[must_use]
    pub const fn new(categories: Arc<G>, tasks: Arc<R>) -> Self {
        Self { categories, tasks }
    }

    /// Creates a new category for the given owner.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the name fails validation.
    pub async fn create_category(
        &self,
        owner: OwnerId,
        name: impl Into<String> + Send,
    ) -> TaskServiceResult<Category> {
        let name = CategoryName::new(name)?;
        let category = Category::new(owner, name);
        self.categories.store(&category).await?;
        Ok(category)
    }

    /// Returns all categories belonging to the owner.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list_categories(&self, owner: OwnerId) -> TaskServiceResult<Vec<Category>> {
        Ok(self.categories.list_by_owner(owner).await?)
    }

    /// Deletes a category, clearing the category reference on every task
    /// that pointed at it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::CategoryNotFound`] when the category is
    /// not visible to the owner.
    pub async fn delete_category(&self, owner: OwnerId, id: CategoryId) -> TaskServiceResult<()> {
        let category = self
            .categories
            .find_by_id(owner, id)
            .await?
            .ok_or(TaskServiceError::CategoryNotFound(id))?;
        self.tasks.detach_category(category.id()).await?;
        self.categories.delete(category.id()).await?;
        Ok(())
    }
}
