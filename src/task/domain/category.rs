//! Category records for grouping tasks.

use super::{CategoryId, CategoryName, OwnerId};
use serde::{Deserialize, Serialize};

/// User-owned grouping for tasks.
///
/// A task belongs to at most one category. Deleting a category detaches it
/// from owning tasks rather than cascading into task deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    owner: OwnerId,
    name: CategoryName,
}

impl Category {
    /// Creates a new category.
    #[must_use]
    pub fn new(owner: OwnerId, name: CategoryName) -> Self {
        Self {
            id: CategoryId::new(),
            owner,
            name,
        }
    }

    /// Reconstructs a category from persisted storage.
    #[must_use]
    pub const fn from_persisted(id: CategoryId, owner: OwnerId, name: CategoryName) -> Self {
        Self { id, owner, name }
    }

    /// Returns the category identifier.
    #[must_use]
    pub const fn id(&self) -> CategoryId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> OwnerId {
        self.owner
    }

    /// Returns the category name.
    #[must_use]
    pub const fn name(&self) -> &CategoryName {
        &self.name
    }
}
