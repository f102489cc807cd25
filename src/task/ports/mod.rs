//! Port contracts for task lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod category;
pub mod collaborator;
pub mod history;
pub mod repository;

pub use category::CategoryRepository;
pub use collaborator::CollaboratorRepository;
pub use history::TaskHistoryRepository;
pub use repository::{RepositoryError, RepositoryResult, TaskRepository};
