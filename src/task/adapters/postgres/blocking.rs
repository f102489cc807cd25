//! Blocking operation helpers for the `PostgreSQL` repositories.
//!
//! Provides utilities for offloading synchronous Diesel operations to a
//! dedicated thread pool, avoiding blocking the async executor.

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

use crate::task::ports::{RepositoryError, RepositoryResult};

/// `PostgreSQL` connection pool type used by the task adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Runs a blocking database operation on a dedicated thread pool.
///
/// Wraps the closure in [`tokio::task::spawn_blocking`] to prevent blocking
/// the async executor's worker threads.
pub(super) async fn run_blocking<F, T>(pool: &PgPool, f: F) -> RepositoryResult<T>
where
    F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get().map_err(RepositoryError::persistence)?;
        f(&mut connection)
    })
    .await
    .map_err(RepositoryError::persistence)?
}
