//! In-memory category repository for tests and examples.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Category, CategoryId, OwnerId},
    ports::{CategoryRepository, RepositoryError, RepositoryResult},
};

/// Thread-safe in-memory category repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<HashMap<CategoryId, Category>>>,
}

impl InMemoryCategoryRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn store(&self, category: &Category) -> RepositoryResult<()> {
        let mut categories = self.categories.write().map_err(lock_error)?;
        if categories.contains_key(&category.id()) {
            return Err(RepositoryError::DuplicateCategory(category.id()));
        }
        categories.insert(category.id(), category.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        owner: OwnerId,
        id: CategoryId,
    ) -> RepositoryResult<Option<Category>> {
        let categories = self.categories.read().map_err(lock_error)?;
        Ok(categories
            .get(&id)
            .filter(|category| category.owner() == owner)
            .cloned())
    }

    async fn list_by_owner(&self, owner: OwnerId) -> RepositoryResult<Vec<Category>> {
        let categories = self.categories.read().map_err(lock_error)?;
        let mut owned: Vec<Category> = categories
            .values()
            .filter(|category| category.owner() == owner)
            .cloned()
            .collect();
        owned.sort_by_key(|category| category.id().into_inner());
        Ok(owned)
    }

    async fn delete(&self, id: CategoryId) -> RepositoryResult<()> {
        let mut categories = self.categories.write().map_err(lock_error)?;
        if categories.remove(&id).is_none() {
            return Err(RepositoryError::CategoryNotFound(id));
        }
        Ok(())
    }
}
