//! Append-only audit log of task lifecycle events.

use super::{HistoryEntryId, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Lifecycle events recorded in a task's history.
///
/// Each event maps to a fixed descriptive string; entries are not
/// parameterized by field-level diffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// The task transitioned from pending to completed.
    MarkedComplete,
    /// The task transitioned from completed back to pending.
    MarkedIncomplete,
    /// The editable fields of a pending task were replaced.
    Updated,
    /// The task was deleted.
    Deleted,
}

impl LifecycleEvent {
    /// Returns the fixed descriptive string recorded for this event.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MarkedComplete => "Task marked as complete",
            Self::MarkedIncomplete => "Task marked as incomplete",
            Self::Updated => "Task updated",
            Self::Deleted => "Task deleted",
        }
    }
}

/// Immutable audit record of a lifecycle event on a task.
///
/// Entries are append-only: never mutated, and deleted only by cascade when
/// the task itself is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    id: HistoryEntryId,
    task_id: TaskId,
    changed_at: DateTime<Utc>,
    description: String,
}

impl HistoryEntry {
    /// Records a lifecycle event, stamping the timestamp once at creation.
    #[must_use]
    pub fn record(task_id: TaskId, event: LifecycleEvent, clock: &impl Clock) -> Self {
        Self {
            id: HistoryEntryId::new(),
            task_id,
            changed_at: clock.utc(),
            description: event.description().to_owned(),
        }
    }

    /// Reconstructs a history entry from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        id: HistoryEntryId,
        task_id: TaskId,
        changed_at: DateTime<Utc>,
        description: String,
    ) -> Self {
        Self {
            id,
            task_id,
            changed_at,
            description,
        }
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> HistoryEntryId {
        self.id
    }

    /// Returns the task this entry belongs to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the timestamp of the recorded event.
    #[must_use]
    pub const fn changed_at(&self) -> DateTime<Utc> {
        self.changed_at
    }

    /// Returns the descriptive text of the recorded event.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}
