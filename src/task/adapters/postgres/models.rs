//! Diesel row models for task lifecycle persistence.

use super::schema::{categories, collaborators, task_history, tasks};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub owner_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Task priority.
    pub priority: String,
    /// Lifecycle status.
    pub status: String,
    /// Completion timestamp, set while the task is completed.
    pub completed_at: Option<DateTime<Utc>>,
    /// Optional category reference.
    pub category_id: Option<uuid::Uuid>,
    /// Whether completing the task spawns a successor.
    pub is_recurring: bool,
    /// Recurrence cadence for recurring tasks.
    pub recurrence_interval: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub owner_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Task priority.
    pub priority: String,
    /// Lifecycle status.
    pub status: String,
    /// Completion timestamp, set while the task is completed.
    pub completed_at: Option<DateTime<Utc>>,
    /// Optional category reference.
    pub category_id: Option<uuid::Uuid>,
    /// Whether completing the task spawns a successor.
    pub is_recurring: bool,
    /// Recurrence cadence for recurring tasks.
    pub recurrence_interval: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for category records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CategoryRow {
    /// Category identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub owner_id: uuid::Uuid,
    /// Category name.
    pub name: String,
}

/// Insert model for category records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = categories)]
pub struct NewCategoryRow {
    /// Category identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub owner_id: uuid::Uuid,
    /// Category name.
    pub name: String,
}

/// Query result row for history entries.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = task_history)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct HistoryRow {
    /// Entry identifier.
    pub id: uuid::Uuid,
    /// Task the entry belongs to.
    pub task_id: uuid::Uuid,
    /// Timestamp of the recorded event.
    pub changed_at: DateTime<Utc>,
    /// Fixed descriptive text of the event.
    pub description: String,
}

/// Insert model for history entries.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = task_history)]
pub struct NewHistoryRow {
    /// Entry identifier.
    pub id: uuid::Uuid,
    /// Task the entry belongs to.
    pub task_id: uuid::Uuid,
    /// Timestamp of the recorded event.
    pub changed_at: DateTime<Utc>,
    /// Fixed descriptive text of the event.
    pub description: String,
}

/// Query result row for collaborator pairings.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = collaborators)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CollaboratorRow {
    /// Pairing identifier.
    pub id: uuid::Uuid,
    /// Task half of the pairing.
    pub task_id: uuid::Uuid,
    /// User half of the pairing.
    pub user_id: uuid::Uuid,
}

/// Insert model for collaborator pairings.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = collaborators)]
pub struct NewCollaboratorRow {
    /// Pairing identifier.
    pub id: uuid::Uuid,
    /// Task half of the pairing.
    pub task_id: uuid::Uuid,
    /// User half of the pairing.
    pub user_id: uuid::Uuid,
}
