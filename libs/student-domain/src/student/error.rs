//! Domain errors for student operations
//!
//! These are domain-level errors that abstract away infrastructure details.
//! Request validation is not represented here: invalid input is rejected by
//! inbound adapters before a Student is ever built.

use thiserror::Error;

use crate::student::ids::StudentId;

/// Errors that can occur while handling students
#[derive(Error, Debug)]
pub enum StudentError {
    /// No student is stored under the given id
    #[error("Student {0} not found")]
    NotFound(StudentId),

    /// The storage backend failed to complete the operation
    #[error("Storage operation failed: {0}")]
    StorageFailure(String),

    /// An unexpected internal error occurred
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl StudentError {
    /// Create a not found error for the given id
    pub fn not_found(id: StudentId) -> Self {
        Self::NotFound(id)
    }

    /// Create a storage failure error with a message
    pub fn storage_failure(msg: impl Into<String>) -> Self {
        Self::StorageFailure(msg.into())
    }

    /// Create an internal error with a message
    pub fn internal_error(msg: impl Into<String>) -> Self {
        Self::InternalError(msg.into())
    }
}

/// Result type alias for student operations
pub type Result<T> = std::result::Result<T, StudentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = StudentError::not_found(StudentId::new(9));
        assert!(matches!(err, StudentError::NotFound(id) if id.value() == 9));
        assert_eq!(err.to_string(), "Student 9 not found");
    }

    #[test]
    fn test_storage_failure_error() {
        let err = StudentError::storage_failure("connection refused");
        assert_eq!(
            err.to_string(),
            "Storage operation failed: connection refused"
        );
    }

    #[test]
    fn test_internal_error() {
        let err = StudentError::internal_error("boom");
        assert!(err.to_string().contains("Internal error"));
    }
}
