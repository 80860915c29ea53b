use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a persisted Student
///
/// StudentId wraps the numeric key assigned by the storage layer so that
/// student ids cannot be mixed up with ages or other integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(i64);

impl StudentId {
    /// Create a StudentId from a raw storage key
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw storage key
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for StudentId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<StudentId> for i64 {
    fn from(id: StudentId) -> Self {
        id.0
    }
}
