//! Student service - Application logic orchestration
//!
//! This module implements the input port on top of the output port. It owns
//! the rules that are not storage concerns: a missing student is a
//! `NotFound` failure here, and updates never change a student's id.

use super::{Student, StudentError, StudentId, StudentServicePort};
use crate::ports::StudentPersistencePort;

/// Service for managing students
///
/// ## Static Dispatch
///
/// The service is generic over any `StudentPersistencePort` implementation.
/// The compiler will generate specialized versions for each concrete type,
/// resulting in zero-cost abstractions.
pub struct StudentService<P> {
    persistence: P,
}

impl<P> StudentService<P>
where
    P: StudentPersistencePort,
{
    /// Create a new StudentService on top of the given persistence port
    pub fn new(persistence: P) -> Self {
        Self { persistence }
    }

    /// Get the underlying persistence port
    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    async fn load(&self, id: StudentId) -> Result<Student, StudentError> {
        self.persistence
            .find_by_id(id)
            .await?
            .ok_or(StudentError::NotFound(id))
    }
}

impl<P> StudentServicePort for StudentService<P>
where
    P: StudentPersistencePort,
{
    async fn find_by_id(&self, id: StudentId) -> Result<Student, StudentError> {
        self.load(id).await
    }

    async fn find_all(&self) -> Result<Vec<Student>, StudentError> {
        self.persistence.find_all().await
    }

    async fn save(&self, student: Student) -> Result<Student, StudentError> {
        self.persistence.save(student).await
    }

    async fn update(&self, id: StudentId, student: Student) -> Result<Student, StudentError> {
        let mut stored = self.load(id).await?;

        stored.firstname = student.firstname;
        stored.lastname = student.lastname;
        stored.age = student.age;
        stored.address = student.address;

        let mut saved = self.persistence.save(stored).await?;
        // The addressed id wins over whatever the storage layer echoes back.
        saved.id = Some(id);
        Ok(saved)
    }

    async fn delete_by_id(&self, id: StudentId) -> Result<(), StudentError> {
        self.load(id).await?;
        self.persistence.delete_by_id(id).await
    }
}
