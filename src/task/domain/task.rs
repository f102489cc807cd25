//! Task aggregate root and its lifecycle transitions.
//!
//! A task has exactly two lifecycle states, `Pending` and `Completed`, and
//! both transitions between them are caller-invocable and reversible. The
//! aggregate enforces the structural invariant that `completed_at` is set
//! precisely while the task is completed, and rejects field edits on
//! completed tasks.

use super::{
    CategoryId, OwnerId, ParsePriorityError, ParseTaskStatusError, RecurrenceInterval,
    TaskDomainError, TaskId, Title,
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Relative urgency of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Default urgency.
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task is open and editable.
    Pending,
    /// Task has been completed; fields are frozen until it is reopened.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// Returns `true` when the status is [`TaskStatus::Completed`].
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Parameter object for creating a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskData {
    /// Owning user.
    pub owner: OwnerId,
    /// Validated task title.
    pub title: Title,
    /// Free-text description.
    pub description: String,
    /// Optional due date; must not lie in the past at creation time.
    pub due_date: Option<NaiveDate>,
    /// Relative urgency.
    pub priority: Priority,
    /// Initial status; defaults to [`TaskStatus::Pending`] when `None`.
    pub status: Option<TaskStatus>,
    /// Optional category reference.
    pub category: Option<CategoryId>,
    /// Whether completing the task spawns a successor.
    pub recurring: bool,
    /// Cadence of the successor; required when `recurring` is set.
    pub recurrence_interval: Option<RecurrenceInterval>,
}

/// Replacement values for the editable fields of a pending task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUpdate {
    /// Validated task title.
    pub title: Title,
    /// Free-text description.
    pub description: String,
    /// Optional due date; must not lie in the past at update time.
    pub due_date: Option<NaiveDate>,
    /// Relative urgency.
    pub priority: Priority,
    /// Optional category reference.
    pub category: Option<CategoryId>,
    /// Whether completing the task spawns a successor.
    pub recurring: bool,
    /// Cadence of the successor; required when `recurring` is set.
    pub recurrence_interval: Option<RecurrenceInterval>,
}

/// Parameter object for reconstructing a persisted task aggregate.
///
/// Rehydration bypasses creation-time validation: a stored task may carry a
/// due date that has since passed, and legacy rows may be flagged recurring
/// without an interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner.
    pub owner: OwnerId,
    /// Persisted title.
    pub title: Title,
    /// Persisted description.
    pub description: String,
    /// Persisted due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted category reference, if any.
    pub category: Option<CategoryId>,
    /// Persisted recurring flag.
    pub recurring: bool,
    /// Persisted recurrence interval, if any.
    pub recurrence_interval: Option<RecurrenceInterval>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner: OwnerId,
    title: Title,
    description: String,
    due_date: Option<NaiveDate>,
    priority: Priority,
    status: TaskStatus,
    completed_at: Option<DateTime<Utc>>,
    category: Option<CategoryId>,
    recurring: bool,
    recurrence_interval: Option<RecurrenceInterval>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task.
    ///
    /// The status defaults to [`TaskStatus::Pending`]. A caller may request
    /// [`TaskStatus::Completed`], in which case the completion timestamp is
    /// stamped from the clock; it is never caller-supplied.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DueDatePast`] when the due date lies
    /// before the current date, or
    /// [`TaskDomainError::MissingRecurrenceInterval`] when the recurring
    /// flag is set without an interval.
    pub fn new(data: NewTaskData, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let now = clock.utc();
        validate_due_date(data.due_date, now.date_naive())?;
        validate_recurrence(data.recurring, data.recurrence_interval)?;

        let status = data.status.unwrap_or(TaskStatus::Pending);
        let completed_at = status.is_completed().then_some(now);

        Ok(Self {
            id: TaskId::new(),
            owner: data.owner,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            priority: data.priority,
            status,
            completed_at,
            category: data.category,
            recurring: data.recurring,
            recurrence_interval: data.recurrence_interval,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            priority: data.priority,
            status: data.status,
            completed_at: data.completed_at,
            category: data.category,
            recurring: data.recurring,
            recurrence_interval: data.recurrence_interval,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> OwnerId {
        self.owner
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the completion timestamp, if any.
    ///
    /// Set precisely while the task is completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the category reference, if any.
    #[must_use]
    pub const fn category(&self) -> Option<CategoryId> {
        self.category
    }

    /// Returns `true` when completing the task spawns a successor.
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        self.recurring
    }

    /// Returns the recurrence interval, if any.
    #[must_use]
    pub const fn recurrence_interval(&self) -> Option<RecurrenceInterval> {
        self.recurrence_interval
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Transitions the task to [`TaskStatus::Completed`].
    ///
    /// The completion timestamp is stamped from the clock only when unset,
    /// so completing an already-completed task preserves the original
    /// timestamp.
    pub fn complete(&mut self, clock: &impl Clock) {
        self.status = TaskStatus::Completed;
        if self.completed_at.is_none() {
            self.completed_at = Some(clock.utc());
        }
        self.touch(clock);
    }

    /// Transitions the task back to [`TaskStatus::Pending`], clearing the
    /// completion timestamp.
    pub fn reopen(&mut self, clock: &impl Clock) {
        self.status = TaskStatus::Pending;
        self.completed_at = None;
        self.touch(clock);
    }

    /// Replaces the editable fields of a pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::CompletedTaskImmutable`] when the task is
    /// completed (no fields are changed),
    /// [`TaskDomainError::DueDatePast`] when the replacement due date lies
    /// before the current date, or
    /// [`TaskDomainError::MissingRecurrenceInterval`] when the recurring
    /// flag is set without an interval.
    pub fn apply_update(
        &mut self,
        update: TaskUpdate,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if self.status.is_completed() {
            return Err(TaskDomainError::CompletedTaskImmutable(self.id));
        }
        let now = clock.utc();
        validate_due_date(update.due_date, now.date_naive())?;
        validate_recurrence(update.recurring, update.recurrence_interval)?;

        self.title = update.title;
        self.description = update.description;
        self.due_date = update.due_date;
        self.priority = update.priority;
        self.category = update.category;
        self.recurring = update.recurring;
        self.recurrence_interval = update.recurrence_interval;
        self.updated_at = now;
        Ok(())
    }

    /// Clears the category reference.
    ///
    /// Invoked by persistence adapters when the owning category is deleted;
    /// the task itself is never deleted by a category cascade.
    pub fn detach_category(&mut self) {
        self.category = None;
    }

    /// Computes the next occurrence of a recurring task.
    ///
    /// Returns `None` unless the task is flagged recurring with a recorded
    /// interval; a recurring task without an interval is skipped silently.
    /// The base date is the due date when set, otherwise the current date
    /// from the clock. The spawned task copies owner, title, description,
    /// priority, category, and recurrence settings; status is forced to
    /// [`TaskStatus::Pending`] with no completion timestamp. The spawned
    /// task is not itself completed, so recurrence never cascades within a
    /// single invocation.
    #[must_use]
    pub fn spawn_next(&self, clock: &impl Clock) -> Option<Self> {
        if !self.recurring {
            return None;
        }
        let interval = self.recurrence_interval?;
        let now = clock.utc();
        let base = self.due_date.unwrap_or_else(|| now.date_naive());
        let next_due = interval.advance(base)?;

        Some(Self {
            id: TaskId::new(),
            owner: self.owner,
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: Some(next_due),
            priority: self.priority,
            status: TaskStatus::Pending,
            completed_at: None,
            category: self.category,
            recurring: true,
            recurrence_interval: Some(interval),
            created_at: now,
            updated_at: now,
        })
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Rejects due dates lying strictly before today.
fn validate_due_date(
    due_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(), TaskDomainError> {
    match due_date {
        Some(due) if due < today => Err(TaskDomainError::DueDatePast { due, today }),
        _ => Ok(()),
    }
}

/// Rejects a recurring flag without a recorded interval.
const fn validate_recurrence(
    recurring: bool,
    interval: Option<RecurrenceInterval>,
) -> Result<(), TaskDomainError> {
    if recurring && interval.is_none() {
        return Err(TaskDomainError::MissingRecurrenceInterval);
    }
    Ok(())
}
