//! Generic storage repository contract
//!
//! The persistence adapter never talks to a database directly. It delegates to
//! a `CrudRepository`, which owns row creation, update and deletion.

use std::future::Future;

use thiserror::Error;

use super::entity::StudentEntity;

/// Errors raised by storage repositories
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Query or mutation failed while executing
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The repository could not reach its backend
    #[error("Connection error: {0}")]
    Connection(String),
}

impl RepositoryError {
    /// Create a connection error with a message
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }
}

/// Basic keyed storage of records of type `E` with keys of type `K`
pub trait CrudRepository<E, K>: Send + Sync {
    /// Load a record by key, `None` when absent
    fn find_by_id(&self, id: K)
        -> impl Future<Output = Result<Option<E>, RepositoryError>> + Send;

    /// Load every record
    fn find_all(&self) -> impl Future<Output = Result<Vec<E>, RepositoryError>> + Send;

    /// Insert a record without a key, or write a keyed record (insert or update)
    ///
    /// Returns the record as stored, key included.
    fn save(&self, entity: E) -> impl Future<Output = Result<E, RepositoryError>> + Send;

    /// Remove a record by key; removing an absent key is a no-op
    fn delete_by_id(&self, id: K) -> impl Future<Output = Result<(), RepositoryError>> + Send;
}

/// Repository of `students` rows keyed by their numeric id
pub trait StudentRepository: CrudRepository<StudentEntity, i64> {}

impl<T> StudentRepository for T where T: CrudRepository<StudentEntity, i64> {}
