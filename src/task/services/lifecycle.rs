//! Service layer orchestrating task lifecycle transitions, history logging,
//! and recurrence generation.

use crate::task::{
    domain::{
        CategoryId, Collaborator, HistoryEntry, LifecycleEvent, NewTaskData, OwnerId, Priority,
        RecurrenceInterval, Task, TaskDomainError, TaskId, TaskStatus, TaskUpdate, Title,
    },
    ports::{
        CategoryRepository, CollaboratorRepository, RepositoryError, TaskHistoryRepository,
        TaskRepository,
    },
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    due_date: Option<NaiveDate>,
    priority: Priority,
    status: Option<TaskStatus>,
    category: Option<CategoryId>,
    recurring: bool,
    recurrence_interval: Option<RecurrenceInterval>,
}

impl CreateTaskRequest {
    /// Creates a request with required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, priority: Priority) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            due_date: None,
            priority,
            status: None,
            category: None,
            recurring: false,
            recurrence_interval: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the initial status; defaults to pending when omitted.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the category reference.
    #[must_use]
    pub const fn with_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the recurring flag.
    #[must_use]
    pub const fn recurring(mut self, recurring: bool) -> Self {
        self.recurring = recurring;
        self
    }

    /// Sets the recurrence interval.
    #[must_use]
    pub const fn with_recurrence_interval(mut self, interval: RecurrenceInterval) -> Self {
        self.recurrence_interval = Some(interval);
        self
    }
}

/// Request payload replacing the editable fields of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: String,
    description: String,
    due_date: Option<NaiveDate>,
    priority: Priority,
    category: Option<CategoryId>,
    recurring: bool,
    recurrence_interval: Option<RecurrenceInterval>,
}

impl UpdateTaskRequest {
    /// Creates a request with required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, priority: Priority) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            due_date: None,
            priority,
            category: None,
            recurring: false,
            recurrence_interval: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the category reference.
    #[must_use]
    pub const fn with_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the recurring flag.
    #[must_use]
    pub const fn recurring(mut self, recurring: bool) -> Self {
        self.recurring = recurring;
        self
    }

    /// Sets the recurrence interval.
    #[must_use]
    pub const fn with_recurrence_interval(mut self, interval: RecurrenceInterval) -> Self {
        self.recurrence_interval = Some(interval);
        self
    }
}

/// Service-level errors for task lifecycle operations.
///
/// `TaskNotFound` covers both a missing task and a task owned by another
/// user, so callers cannot probe for the existence of foreign tasks;
/// `CategoryNotFound` behaves the same way for categories.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    /// No task with the given identifier is visible to the caller.
    #[error("task {0} not found")]
    TaskNotFound(TaskId),
    /// No category with the given identifier is visible to the caller.
    #[error("category {0} not found")]
    CategoryNotFound(CategoryId),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task lifecycle orchestration service.
///
/// Implements the legal status transitions and their side effects: stamping
/// completion timestamps, appending history entries, spawning the next
/// occurrence of recurring tasks, and cascading deletion.
#[derive(Clone)]
pub struct TaskLifecycleService<R, G, H, B, C>
where
    R: TaskRepository,
    G: CategoryRepository,
    H: TaskHistoryRepository,
    B: CollaboratorRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    categories: Arc<G>,
    history: Arc<H>,
    collaborators: Arc<B>,
    clock: Arc<C>,
}

impl<R, G, H, B, C> TaskLifecycleService<R, G, H, B, C>
where
    R: TaskRepository,
    G: CategoryRepository,
    H: TaskHistoryRepository,
    B: CollaboratorRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(
        tasks: Arc<R>,
        categories: Arc<G>,
        history: Arc<H>,
        collaborators: Arc<B>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            tasks,
            categories,
            history,
            collaborators,
            clock,
        }
    }

    async fn require_task(&self, owner: OwnerId, id: TaskId) -> TaskServiceResult<Task> {
        self.tasks
            .find_by_id(owner, id)
            .await?
            .ok_or(TaskServiceError::TaskNotFound(id))
    }

    async fn require_category(&self, owner: OwnerId, id: CategoryId) -> TaskServiceResult<()> {
        self.categories
            .find_by_id(owner, id)
            .await?
            .map(|_| ())
            .ok_or(TaskServiceError::CategoryNotFound(id))
    }

    async fn log(&self, task_id: TaskId, event: LifecycleEvent) -> TaskServiceResult<()> {
        let entry = HistoryEntry::record(task_id, event, &*self.clock);
        self.history.append(&entry).await?;
        Ok(())
    }

    /// Creates a new task for the given owner.
    ///
    /// Validation runs before any persistence attempt. Creation never
    /// triggers recurrence, even when the requested initial status is
    /// completed, and writes no history entry.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when validation fails, or
    /// [`TaskServiceError::CategoryNotFound`] when the referenced category
    /// is not visible to the owner.
    pub async fn create_task(
        &self,
        owner: OwnerId,
        request: CreateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let title = Title::new(request.title)?;
        if let Some(category) = request.category {
            self.require_category(owner, category).await?;
        }

        let task = Task::new(
            NewTaskData {
                owner,
                title,
                description: request.description,
                due_date: request.due_date,
                priority: request.priority,
                status: request.status,
                category: request.category,
                recurring: request.recurring,
                recurrence_interval: request.recurrence_interval,
            },
            &*self.clock,
        )?;
        self.tasks.store(&task).await?;
        Ok(task)
    }

    /// Replaces the editable fields of a pending task and records a history
    /// entry.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task is not
    /// visible to the owner, [`TaskDomainError::CompletedTaskImmutable`]
    /// (wrapped) when the task is completed, or [`TaskServiceError::Domain`]
    /// when field validation fails. On error no fields are changed and no
    /// history is written.
    pub async fn update_task(
        &self,
        owner: OwnerId,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let mut task = self.require_task(owner, id).await?;
        // Edit-blocking takes precedence over field validation.
        if task.status().is_completed() {
            return Err(TaskDomainError::CompletedTaskImmutable(id).into());
        }

        let title = Title::new(request.title)?;
        if let Some(category) = request.category {
            self.require_category(owner, category).await?;
        }

        task.apply_update(
            TaskUpdate {
                title,
                description: request.description,
                due_date: request.due_date,
                priority: request.priority,
                category: request.category,
                recurring: request.recurring,
                recurrence_interval: request.recurrence_interval,
            },
            &*self.clock,
        )?;
        self.tasks.update(&task).await?;
        self.log(task.id(), LifecycleEvent::Updated).await?;
        Ok(task)
    }

    /// Transitions a task to completed.
    ///
    /// Stamps the completion timestamp, appends a history entry, and — for
    /// recurring tasks — spawns and persists the next occurrence. Calling
    /// this on an already-completed task is a no-op: no history is written
    /// and no further occurrence is spawned, so repeated calls cannot
    /// duplicate recurrence records.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task is not
    /// visible to the owner.
    pub async fn mark_complete(&self, owner: OwnerId, id: TaskId) -> TaskServiceResult<Task> {
        let mut task = self.require_task(owner, id).await?;
        if task.status().is_completed() {
            return Ok(task);
        }

        task.complete(&*self.clock);
        self.tasks.update(&task).await?;
        self.log(task.id(), LifecycleEvent::MarkedComplete).await?;

        if let Some(next) = task.spawn_next(&*self.clock) {
            self.tasks.store(&next).await?;
        }
        Ok(task)
    }

    /// Transitions a completed task back to pending, clearing its
    /// completion timestamp.
    ///
    /// Never triggers recurrence. Calling this on an already-pending task
    /// is a no-op and writes no history.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task is not
    /// visible to the owner.
    pub async fn mark_incomplete(&self, owner: OwnerId, id: TaskId) -> TaskServiceResult<Task> {
        let mut task = self.require_task(owner, id).await?;
        if !task.status().is_completed() {
            return Ok(task);
        }

        task.reopen(&*self.clock);
        self.tasks.update(&task).await?;
        self.log(task.id(), LifecycleEvent::MarkedIncomplete).await?;
        Ok(task)
    }

    /// Deletes a task in any status, cascading removal of its history and
    /// collaborator rows.
    ///
    /// A deletion entry is appended before the cascade for traceability in
    /// stores that audit removals; the cascade then clears the task's log.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task is not
    /// visible to the owner.
    pub async fn delete_task(&self, owner: OwnerId, id: TaskId) -> TaskServiceResult<()> {
        let task = self.require_task(owner, id).await?;
        self.log(task.id(), LifecycleEvent::Deleted).await?;
        self.history.delete_for_task(task.id()).await?;
        self.collaborators.delete_for_task(task.id()).await?;
        self.tasks.delete(task.id()).await?;
        Ok(())
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task is not
    /// visible to the owner.
    pub async fn get_task(&self, owner: OwnerId, id: TaskId) -> TaskServiceResult<Task> {
        self.require_task(owner, id).await
    }

    /// Returns all tasks belonging to the owner, ordered by creation time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list_tasks(&self, owner: OwnerId) -> TaskServiceResult<Vec<Task>> {
        Ok(self.tasks.list_by_owner(owner).await?)
    }

    /// Returns the history log of a task in append order.
    ///
    /// Access is scoped through the task relation: the caller must own the
    /// task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task is not
    /// visible to the owner.
    pub async fn history_for_task(
        &self,
        owner: OwnerId,
        id: TaskId,
    ) -> TaskServiceResult<Vec<HistoryEntry>> {
        let task = self.require_task(owner, id).await?;
        Ok(self.history.list_for_task(task.id()).await?)
    }

    /// Associates an additional user with a task owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task is not
    /// visible to the owner, or
    /// [`RepositoryError::DuplicateCollaborator`] (wrapped) when the
    /// pairing already exists.
    pub async fn add_collaborator(
        &self,
        owner: OwnerId,
        id: TaskId,
        user: OwnerId,
    ) -> TaskServiceResult<Collaborator> {
        let task = self.require_task(owner, id).await?;
        let collaborator = Collaborator::new(task.id(), user);
        self.collaborators.add(&collaborator).await?;
        Ok(collaborator)
    }

    /// Returns the collaborator pairings of a task owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task is not
    /// visible to the owner.
    pub async fn collaborators_for_task(
        &self,
        owner: OwnerId,
        id: TaskId,
    ) -> TaskServiceResult<Vec<Collaborator>> {
        let task = self.require_task(owner, id).await?;
        Ok(self.collaborators.list_for_task(task.id()).await?)
    }
}
