//! Error types for task domain validation and parsing.

use super::TaskId;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the maximum length.
    #[error("task title is {0} characters long, maximum is 255")]
    TitleTooLong(usize),

    /// The category name is empty after trimming.
    #[error("category name must not be empty")]
    EmptyCategoryName,

    /// The category name exceeds the maximum length.
    #[error("category name is {0} characters long, maximum is 255")]
    CategoryNameTooLong(usize),

    /// The due date lies before the current date.
    #[error("due date {due} is before today ({today})")]
    DueDatePast {
        /// The rejected due date.
        due: NaiveDate,
        /// The current date at validation time.
        today: NaiveDate,
    },

    /// A recurring task was given no recurrence interval.
    #[error("recurring tasks require a recurrence interval")]
    MissingRecurrenceInterval,

    /// A field edit was attempted on a completed task.
    #[error("task {0} is completed and cannot be edited")]
    CompletedTaskImmutable(TaskId),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing recurrence intervals from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown recurrence interval: {0}")]
pub struct ParseRecurrenceIntervalError(pub String);
