//! Port trait for the Student Service
//!
//! This is the input port consumed by inbound adapters (the REST layer).
//! The concrete `StudentService` in `service.rs` provides the implementation,
//! and tests can substitute their own.

use std::future::Future;

use crate::student::{entity::Student, error::StudentError, ids::StudentId};

/// Port trait for student application operations
pub trait StudentServicePort: Send + Sync {
    /// Find a student by id
    ///
    /// # Errors
    ///
    /// - `StudentError::NotFound` if no student is stored under `id`
    /// - `StudentError::StorageFailure` if the lookup fails
    fn find_by_id(
        &self,
        id: StudentId,
    ) -> impl Future<Output = Result<Student, StudentError>> + Send;

    /// List every stored student. The result may be empty.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Student>, StudentError>> + Send;

    /// Persist a student and return it with its id populated
    ///
    /// Callers are responsible for validating the student beforehand.
    fn save(&self, student: Student)
        -> impl Future<Output = Result<Student, StudentError>> + Send;

    /// Replace the fields of an existing student
    ///
    /// The returned student always carries `id`, whatever id `student` holds.
    ///
    /// # Errors
    ///
    /// Returns `StudentError::NotFound` if no student is stored under `id`
    fn update(
        &self,
        id: StudentId,
        student: Student,
    ) -> impl Future<Output = Result<Student, StudentError>> + Send;

    /// Delete an existing student
    ///
    /// # Errors
    ///
    /// Returns `StudentError::NotFound` if no student is stored under `id`
    fn delete_by_id(&self, id: StudentId)
        -> impl Future<Output = Result<(), StudentError>> + Send;
}
