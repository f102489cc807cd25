//! Collaborator pairings granting additional users an association with a
//! task.

use super::{CollaboratorId, OwnerId, TaskId};
use serde::{Deserialize, Serialize};

/// A `(task, user)` pairing. Unique per pair; removed by cascade when the
/// task is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    id: CollaboratorId,
    task_id: TaskId,
    user: OwnerId,
}

impl Collaborator {
    /// Creates a new collaborator pairing.
    #[must_use]
    pub fn new(task_id: TaskId, user: OwnerId) -> Self {
        Self {
            id: CollaboratorId::new(),
            task_id,
            user,
        }
    }

    /// Reconstructs a collaborator pairing from persisted storage.
    #[must_use]
    pub const fn from_persisted(id: CollaboratorId, task_id: TaskId, user: OwnerId) -> Self {
        Self { id, task_id, user }
    }

    /// Returns the pairing identifier.
    #[must_use]
    pub const fn id(&self) -> CollaboratorId {
        self.id
    }

    /// Returns the task this pairing belongs to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the associated user.
    #[must_use]
    pub const fn user(&self) -> OwnerId {
        self.user
    }
}
