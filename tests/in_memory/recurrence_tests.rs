//! End-to-end recurrence flows: completing a recurring task spawns its
//! next occurrence.

use crate::in_memory::helpers::{TestApp, app, owner};
use chrono::NaiveDate;
use rstest::rstest;
use taskweave::task::{
    domain::{
        OwnerId, PersistedTaskData, Priority, RecurrenceInterval, Task, TaskId, TaskStatus, Title,
    },
    ports::TaskRepository,
    services::CreateTaskRequest,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Seeds a stored recurring task with a fixed due date through the
/// repository port, the way a long-lived row would reach the service.
async fn seed_recurring_task(
    app: &TestApp,
    owner: OwnerId,
    due_date: NaiveDate,
    interval: Option<RecurrenceInterval>,
) -> Task {
    let stamped = "2024-01-01T09:00:00Z"
        .parse()
        .expect("valid RFC 3339 timestamp");
    let task = Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        owner,
        title: Title::new("Weekly report").expect("valid title"),
        description: "Summarise the week".to_owned(),
        due_date: Some(due_date),
        priority: Priority::High,
        status: TaskStatus::Pending,
        completed_at: None,
        category: None,
        recurring: true,
        recurrence_interval: interval,
        created_at: stamped,
        updated_at: stamped,
    });
    app.tasks.store(&task).await.expect("task stored");
    task
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_weekly_task_spawns_occurrence_a_week_later(app: TestApp, owner: OwnerId) {
    let seeded =
        seed_recurring_task(&app, owner, date(2024, 1, 1), Some(RecurrenceInterval::Weekly)).await;

    app.lifecycle
        .mark_complete(owner, seeded.id())
        .await
        .expect("task completed");

    let tasks = app.lifecycle.list_tasks(owner).await.expect("tasks listed");
    assert_eq!(tasks.len(), 2);

    let spawned = tasks
        .iter()
        .find(|task| task.id() != seeded.id())
        .expect("spawned occurrence present");
    assert_eq!(spawned.due_date(), Some(date(2024, 1, 8)));
    assert_eq!(spawned.status(), TaskStatus::Pending);
    assert!(spawned.completed_at().is_none());
    assert_eq!(spawned.title(), seeded.title());
    assert_eq!(spawned.recurrence_interval(), Some(RecurrenceInterval::Weekly));

    let entries = app
        .lifecycle
        .history_for_task(owner, seeded.id())
        .await
        .expect("history fetched");
    assert_eq!(entries.len(), 1);
    let entry = entries.first().expect("one entry");
    assert_eq!(entry.description(), "Task marked as complete");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_daily_task_spawns_occurrence_next_day(app: TestApp, owner: OwnerId) {
    let seeded =
        seed_recurring_task(&app, owner, date(2024, 3, 15), Some(RecurrenceInterval::Daily)).await;

    app.lifecycle
        .mark_complete(owner, seeded.id())
        .await
        .expect("task completed");

    let tasks = app.lifecycle.list_tasks(owner).await.expect("tasks listed");
    let spawned = tasks
        .iter()
        .find(|task| task.id() != seeded.id())
        .expect("spawned occurrence present");
    assert_eq!(spawned.due_date(), Some(date(2024, 3, 16)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn recurring_task_without_interval_completes_without_spawning(app: TestApp, owner: OwnerId) {
    let seeded = seed_recurring_task(&app, owner, date(2024, 1, 1), None).await;

    app.lifecycle
        .mark_complete(owner, seeded.id())
        .await
        .expect("task completed");

    let tasks = app.lifecycle.list_tasks(owner).await.expect("tasks listed");
    assert_eq!(tasks.len(), 1);
    let only = tasks.first().expect("one task");
    assert_eq!(only.status(), TaskStatus::Completed);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn spawned_occurrence_recurs_again_when_completed(app: TestApp, owner: OwnerId) {
    let seeded =
        seed_recurring_task(&app, owner, date(2024, 1, 1), Some(RecurrenceInterval::Weekly)).await;
    app.lifecycle
        .mark_complete(owner, seeded.id())
        .await
        .expect("first completion");

    let tasks = app.lifecycle.list_tasks(owner).await.expect("tasks listed");
    let spawned_id = tasks
        .iter()
        .find(|task| task.id() != seeded.id())
        .expect("spawned occurrence present")
        .id();

    app.lifecycle
        .mark_complete(owner, spawned_id)
        .await
        .expect("second completion");

    let tasks = app.lifecycle.list_tasks(owner).await.expect("tasks listed");
    assert_eq!(tasks.len(), 3);
    let third = tasks
        .iter()
        .find(|task| task.status() == TaskStatus::Pending)
        .expect("third occurrence pending");
    assert_eq!(third.due_date(), Some(date(2024, 1, 15)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn non_recurring_task_never_spawns(app: TestApp, owner: OwnerId) {
    let created = app
        .lifecycle
        .create_task(
            owner,
            CreateTaskRequest::new("One-off errand", Priority::Low),
        )
        .await
        .expect("task created");

    app.lifecycle
        .mark_complete(owner, created.id())
        .await
        .expect("task completed");

    let tasks = app.lifecycle.list_tasks(owner).await.expect("tasks listed");
    assert_eq!(tasks.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeated_completion_spawns_only_one_occurrence(app: TestApp, owner: OwnerId) {
    let seeded =
        seed_recurring_task(&app, owner, date(2024, 1, 1), Some(RecurrenceInterval::Daily)).await;

    app.lifecycle
        .mark_complete(owner, seeded.id())
        .await
        .expect("first completion");
    app.lifecycle
        .mark_complete(owner, seeded.id())
        .await
        .expect("repeated completion");

    let tasks = app.lifecycle.list_tasks(owner).await.expect("tasks listed");
    assert_eq!(tasks.len(), 2);
}
