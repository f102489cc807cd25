//! Domain model for task lifecycle and recurrence management.
//!
//! The task domain models owner-scoped tasks with a two-state lifecycle,
//! recurrence generation on completion, categories, collaborators, and an
//! append-only history log, keeping all infrastructure concerns outside of
//! the domain boundary.

mod category;
mod collaborator;
mod error;
mod history;
mod ids;
mod recurrence;
mod task;

pub use category::Category;
pub use collaborator::Collaborator;
pub use error::{
    ParsePriorityError, ParseRecurrenceIntervalError, ParseTaskStatusError, TaskDomainError,
};
pub use history::{HistoryEntry, LifecycleEvent};
pub use ids::{CategoryId, CategoryName, CollaboratorId, HistoryEntryId, OwnerId, TaskId, Title};
pub use recurrence::RecurrenceInterval;
pub use task::{NewTaskData, PersistedTaskData, Priority, Task, TaskStatus, TaskUpdate};
