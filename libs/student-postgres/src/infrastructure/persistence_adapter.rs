//! Persistence adapter
//!
//! Implements the domain `StudentPersistencePort` by mapping students to
//! `StudentEntity` records and delegating to a `StudentRepository`.

use student_domain::{Student, StudentError, StudentId, StudentPersistencePort};
use tracing::warn;

use super::{
    mapper,
    repository::{RepositoryError, StudentRepository},
};

impl From<RepositoryError> for StudentError {
    fn from(err: RepositoryError) -> Self {
        warn!(error = %err, "Storage repository failed");
        StudentError::storage_failure(err.to_string())
    }
}

/// Output port implementation over any `StudentRepository`
#[derive(Clone)]
pub struct StudentPersistenceAdapter<R> {
    repository: R,
}

impl<R> StudentPersistenceAdapter<R>
where
    R: StudentRepository,
{
    /// Create an adapter delegating to the given repository
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Get the underlying repository
    pub fn repository(&self) -> &R {
        &self.repository
    }
}

impl<R> StudentPersistencePort for StudentPersistenceAdapter<R>
where
    R: StudentRepository,
{
    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, StudentError> {
        let entity = self.repository.find_by_id(id.value()).await?;
        Ok(entity.map(mapper::to_student))
    }

    async fn find_all(&self) -> Result<Vec<Student>, StudentError> {
        let entities = self.repository.find_all().await?;
        Ok(mapper::to_student_list(entities))
    }

    async fn save(&self, student: Student) -> Result<Student, StudentError> {
        let saved = self
            .repository
            .save(mapper::to_student_entity(student))
            .await?;
        Ok(mapper::to_student(saved))
    }

    async fn delete_by_id(&self, id: StudentId) -> Result<(), StudentError> {
        self.repository.delete_by_id(id.value()).await?;
        Ok(())
    }
}
