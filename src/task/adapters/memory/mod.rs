//! In-memory adapters for task lifecycle persistence.

mod category;
mod collaborator;
mod history;
mod task;

pub use category::InMemoryCategoryRepository;
pub use collaborator::InMemoryCollaboratorRepository;
pub use history::InMemoryTaskHistoryRepository;
pub use task::InMemoryTaskRepository;
