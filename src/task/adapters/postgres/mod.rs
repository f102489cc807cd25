//! `PostgreSQL` adapters for task lifecycle persistence.

mod blocking;
mod category;
mod collaborator;
mod history;
mod models;
mod schema;
mod task;

pub use blocking::PgPool;
pub use category::PostgresCategoryRepository;
pub use collaborator::PostgresCollaboratorRepository;
pub use history::PostgresTaskHistoryRepository;
pub use task::PostgresTaskRepository;
