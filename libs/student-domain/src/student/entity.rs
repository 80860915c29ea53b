//! Domain entity for students
//!
//! A Student is a plain data record. It knows nothing about how it is
//! transported or stored; adapters translate it to their own shapes.

use serde::{Deserialize, Serialize};

use crate::student::ids::StudentId;

/// A student registered in the system
///
/// The `id` stays `None` until the storage layer assigns one. Once assigned it
/// never changes; every other field may be replaced through an update.
///
/// # Example
///
/// ```rust
/// use student_domain::student::{Student, StudentId};
///
/// let student = Student::new("Ana", "Lopez", 21, "Main St");
/// assert!(!student.is_persisted());
///
/// let stored = student.with_id(StudentId::new(1));
/// assert!(stored.is_persisted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Storage-assigned identifier, unset before the first save
    pub id: Option<StudentId>,
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
    pub address: String,
}

impl Student {
    /// Create a new, not yet persisted Student
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        age: i32,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            firstname: firstname.into(),
            lastname: lastname.into(),
            age,
            address: address.into(),
        }
    }

    /// Return the same student carrying the given id
    pub fn with_id(mut self, id: StudentId) -> Self {
        self.id = Some(id);
        self
    }

    /// Check if this student has been assigned an id by storage
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
