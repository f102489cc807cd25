//! End-to-end category flows: grouping, owner scoping, and the
//! detach-on-delete cascade.

use crate::in_memory::helpers::{TestApp, app, owner};
use rstest::rstest;
use taskweave::task::{
    domain::{OwnerId, Priority},
    services::{CreateTaskRequest, TaskServiceError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_can_be_created_in_a_category(app: TestApp, owner: OwnerId) {
    let category = app
        .categories
        .create_category(owner, "Errands")
        .await
        .expect("category created");

    let task = app
        .lifecycle
        .create_task(
            owner,
            CreateTaskRequest::new("Buy stamps", Priority::Low).with_category(category.id()),
        )
        .await
        .expect("task created");

    assert_eq!(task.category(), Some(category.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn foreign_category_is_rejected_at_creation(app: TestApp, owner: OwnerId) {
    let foreign_owner = OwnerId::new();
    let category = app
        .categories
        .create_category(foreign_owner, "Not yours")
        .await
        .expect("category created");

    let result = app
        .lifecycle
        .create_task(
            owner,
            CreateTaskRequest::new("Trespassing", Priority::Low).with_category(category.id()),
        )
        .await;

    assert!(matches!(
        result,
        Err(TaskServiceError::CategoryNotFound(id)) if id == category.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_category_detaches_every_owning_task(app: TestApp, owner: OwnerId) {
    let category = app
        .categories
        .create_category(owner, "Errands")
        .await
        .expect("category created");
    let first = app
        .lifecycle
        .create_task(
            owner,
            CreateTaskRequest::new("Buy stamps", Priority::Low).with_category(category.id()),
        )
        .await
        .expect("task created");
    let second = app
        .lifecycle
        .create_task(
            owner,
            CreateTaskRequest::new("Post letters", Priority::Low).with_category(category.id()),
        )
        .await
        .expect("task created");

    app.categories
        .delete_category(owner, category.id())
        .await
        .expect("category deleted");

    for id in [first.id(), second.id()] {
        let task = app
            .lifecycle
            .get_task(owner, id)
            .await
            .expect("task survives category deletion");
        assert!(task.category().is_none());
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn category_deletion_leaves_unrelated_tasks_untouched(app: TestApp, owner: OwnerId) {
    let doomed = app
        .categories
        .create_category(owner, "Doomed")
        .await
        .expect("category created");
    let kept = app
        .categories
        .create_category(owner, "Kept")
        .await
        .expect("category created");
    let task = app
        .lifecycle
        .create_task(
            owner,
            CreateTaskRequest::new("Steady", Priority::Low).with_category(kept.id()),
        )
        .await
        .expect("task created");

    app.categories
        .delete_category(owner, doomed.id())
        .await
        .expect("category deleted");

    let fetched = app
        .lifecycle
        .get_task(owner, task.id())
        .await
        .expect("task fetched");
    assert_eq!(fetched.category(), Some(kept.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn category_listing_is_owner_scoped(app: TestApp, owner: OwnerId) {
    app.categories
        .create_category(owner, "Errands")
        .await
        .expect("category created");
    app.categories
        .create_category(OwnerId::new(), "Foreign")
        .await
        .expect("category created");

    let listed = app
        .categories
        .list_categories(owner)
        .await
        .expect("categories listed");
    assert_eq!(listed.len(), 1);
    let only = listed.first().expect("one category");
    assert_eq!(only.name().as_str(), "Errands");
}
