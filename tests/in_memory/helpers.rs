//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskweave::task::{
    adapters::memory::{
        InMemoryCategoryRepository, InMemoryCollaboratorRepository, InMemoryTaskHistoryRepository,
        InMemoryTaskRepository,
    },
    domain::OwnerId,
    services::{CategoryService, TaskLifecycleService},
};

/// Lifecycle service wired to in-memory adapters.
pub type TestLifecycleService = TaskLifecycleService<
    InMemoryTaskRepository,
    InMemoryCategoryRepository,
    InMemoryTaskHistoryRepository,
    InMemoryCollaboratorRepository,
    DefaultClock,
>;

/// Category service wired to in-memory adapters.
pub type TestCategoryService = CategoryService<InMemoryCategoryRepository, InMemoryTaskRepository>;

/// Fully wired in-memory application: both services share the same stores.
pub struct TestApp {
    /// Lifecycle service under test.
    pub lifecycle: TestLifecycleService,
    /// Category service under test.
    pub categories: TestCategoryService,
    /// Task store shared by both services.
    pub tasks: Arc<InMemoryTaskRepository>,
    /// History store backing the lifecycle service.
    pub history: Arc<InMemoryTaskHistoryRepository>,
    /// Collaborator store backing the lifecycle service.
    pub collaborators: Arc<InMemoryCollaboratorRepository>,
}

/// Provides a fully wired in-memory application.
#[fixture]
pub fn app() -> TestApp {
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let categories = Arc::new(InMemoryCategoryRepository::new());
    let history = Arc::new(InMemoryTaskHistoryRepository::new());
    let collaborators = Arc::new(InMemoryCollaboratorRepository::new());
    TestApp {
        lifecycle: TaskLifecycleService::new(
            Arc::clone(&tasks),
            Arc::clone(&categories),
            Arc::clone(&history),
            Arc::clone(&collaborators),
            Arc::new(DefaultClock),
        ),
        categories: CategoryService::new(categories, Arc::clone(&tasks)),
        tasks,
        history,
        collaborators,
    }
}

/// Provides a fresh owner identity.
#[fixture]
pub fn owner() -> OwnerId {
    OwnerId::new()
}
