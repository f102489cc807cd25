//! End-to-end lifecycle flows against the public crate API.

use crate::in_memory::helpers::{TestApp, app, owner};
use taskweave::task::{
    domain::{OwnerId, Priority, TaskStatus},
    ports::{CollaboratorRepository, TaskHistoryRepository},
    services::{CreateTaskRequest, TaskServiceError, UpdateTaskRequest},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_flow_records_history_in_order(
    app: TestApp,
    owner: OwnerId,
) -> eyre::Result<()> {
    let task = app
        .lifecycle
        .create_task(
            owner,
            CreateTaskRequest::new("Prepare slides", Priority::High)
                .with_description("For Monday"),
        )
        .await?;

    app.lifecycle
        .update_task(
            owner,
            task.id(),
            UpdateTaskRequest::new("Prepare slides", Priority::High)
                .with_description("For Monday, 20 minutes"),
        )
        .await?;
    app.lifecycle.mark_complete(owner, task.id()).await?;
    app.lifecycle.mark_incomplete(owner, task.id()).await?;

    let entries = app.lifecycle.history_for_task(owner, task.id()).await?;
    let descriptions: Vec<&str> = entries.iter().map(|entry| entry.description()).collect();
    assert_eq!(
        descriptions,
        vec![
            "Task updated",
            "Task marked as complete",
            "Task marked as incomplete",
        ]
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_task_blocks_edits_until_reopened(app: TestApp, owner: OwnerId) {
    let task = app
        .lifecycle
        .create_task(owner, CreateTaskRequest::new("Locked", Priority::Low))
        .await
        .expect("task created");
    app.lifecycle
        .mark_complete(owner, task.id())
        .await
        .expect("task completed");

    let blocked = app
        .lifecycle
        .update_task(
            owner,
            task.id(),
            UpdateTaskRequest::new("Renamed", Priority::Low),
        )
        .await;
    assert!(matches!(blocked, Err(TaskServiceError::Domain(_))));

    app.lifecycle
        .mark_incomplete(owner, task.id())
        .await
        .expect("task reopened");
    let renamed = app
        .lifecycle
        .update_task(
            owner,
            task.id(),
            UpdateTaskRequest::new("Renamed", Priority::Low),
        )
        .await
        .expect("update after reopen");
    assert_eq!(renamed.title().as_str(), "Renamed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_leaves_no_orphaned_rows(app: TestApp, owner: OwnerId) {
    let task = app
        .lifecycle
        .create_task(owner, CreateTaskRequest::new("Ephemeral", Priority::Low))
        .await
        .expect("task created");
    app.lifecycle
        .add_collaborator(owner, task.id(), OwnerId::new())
        .await
        .expect("collaborator added");
    app.lifecycle
        .mark_complete(owner, task.id())
        .await
        .expect("task completed");

    app.lifecycle
        .delete_task(owner, task.id())
        .await
        .expect("task deleted");

    let entries = app
        .history
        .list_for_task(task.id())
        .await
        .expect("history listed");
    assert!(entries.is_empty());
    let pairings = app
        .collaborators
        .list_for_task(task.id())
        .await
        .expect("collaborators listed");
    assert!(pairings.is_empty());
    let remaining = app.lifecycle.list_tasks(owner).await.expect("tasks listed");
    assert!(remaining.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn owners_see_only_their_own_tasks(app: TestApp, owner: OwnerId) {
    let other = OwnerId::new();
    app.lifecycle
        .create_task(owner, CreateTaskRequest::new("Mine", Priority::Low))
        .await
        .expect("task created");
    let theirs = app
        .lifecycle
        .create_task(other, CreateTaskRequest::new("Theirs", Priority::Low))
        .await
        .expect("task created");

    let mine = app.lifecycle.list_tasks(owner).await.expect("tasks listed");
    assert_eq!(mine.len(), 1);
    let only = mine.first().expect("one task");
    assert_eq!(only.title().as_str(), "Mine");

    let probe = app.lifecycle.get_task(owner, theirs.id()).await;
    assert!(matches!(probe, Err(TaskServiceError::TaskNotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn history_of_foreign_task_is_not_visible(app: TestApp, owner: OwnerId) {
    let task = app
        .lifecycle
        .create_task(owner, CreateTaskRequest::new("Audited", Priority::Low))
        .await
        .expect("task created");
    app.lifecycle
        .mark_complete(owner, task.id())
        .await
        .expect("task completed");

    let probe = app.lifecycle.history_for_task(OwnerId::new(), task.id()).await;
    assert!(matches!(probe, Err(TaskServiceError::TaskNotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn collaborator_pairings_survive_completion(app: TestApp, owner: OwnerId) {
    let task = app
        .lifecycle
        .create_task(owner, CreateTaskRequest::new("Shared", Priority::Low))
        .await
        .expect("task created");
    let helper = OwnerId::new();
    app.lifecycle
        .add_collaborator(owner, task.id(), helper)
        .await
        .expect("collaborator added");

    app.lifecycle
        .mark_complete(owner, task.id())
        .await
        .expect("task completed");

    let pairings = app
        .lifecycle
        .collaborators_for_task(owner, task.id())
        .await
        .expect("collaborators listed");
    assert_eq!(pairings.len(), 1);
    let pairing = pairings.first().expect("one pairing");
    assert_eq!(pairing.user(), helper);
    assert_eq!(pairing.task_id(), task.id());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_at_round_trips_through_transitions(app: TestApp, owner: OwnerId) {
    let task = app
        .lifecycle
        .create_task(owner, CreateTaskRequest::new("Toggle", Priority::Low))
        .await
        .expect("task created");

    let completed = app
        .lifecycle
        .mark_complete(owner, task.id())
        .await
        .expect("task completed");
    assert!(completed.completed_at().is_some());

    let reopened = app
        .lifecycle
        .mark_incomplete(owner, task.id())
        .await
        .expect("task reopened");
    assert_eq!(reopened.status(), TaskStatus::Pending);
    assert!(reopened.completed_at().is_none());

    let fetched = app
        .lifecycle
        .get_task(owner, task.id())
        .await
        .expect("task fetched");
    assert_eq!(fetched, reopened);
}
