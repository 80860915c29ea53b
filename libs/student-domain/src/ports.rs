//! Ports (trait definitions) for external dependencies
//!
//! This module defines the contracts (ports) that outbound adapters must implement.
//! Following hexagonal architecture, the domain defines what it needs, and the
//! infrastructure provides implementations.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait` to ensure zero-cost abstractions and static dispatch.

use std::future::Future;

use crate::student::{entity::Student, error::StudentError, ids::StudentId};

/// Port for student persistence
///
/// This trait abstracts away the storage backend (PostgreSQL, in-memory, etc.).
/// Implementations must handle:
/// - Translating the domain Student to their own storage record and back
/// - Assigning ids to students saved without one
/// - Converting infrastructure errors to `StudentError::StorageFailure`
pub trait StudentPersistencePort: Send + Sync {
    /// Look up a student by id
    ///
    /// A missing student is `Ok(None)`, not an error.
    fn find_by_id(
        &self,
        id: StudentId,
    ) -> impl Future<Output = Result<Option<Student>, StudentError>> + Send;

    /// Retrieve every stored student
    fn find_all(&self) -> impl Future<Output = Result<Vec<Student>, StudentError>> + Send;

    /// Save a student
    ///
    /// Inserts when `student.id` is unset, otherwise writes the student under
    /// its id. The returned student always carries its id.
    ///
    /// # Errors
    ///
    /// Returns `StudentError::StorageFailure` if the storage operation fails
    fn save(&self, student: Student)
        -> impl Future<Output = Result<Student, StudentError>> + Send;

    /// Delete a student by id
    ///
    /// Deleting an id that is not stored is not an error.
    fn delete_by_id(&self, id: StudentId)
        -> impl Future<Output = Result<(), StudentError>> + Send;
}
