//! Application services for task lifecycle orchestration.

mod category;
mod lifecycle;

pub use category::CategoryService;
pub use lifecycle::{
    CreateTaskRequest, TaskLifecycleService, TaskServiceError, TaskServiceResult,
    UpdateTaskRequest,
};
