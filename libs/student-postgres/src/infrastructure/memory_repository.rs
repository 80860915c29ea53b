//! In-memory Student Repository
//!
//! Keeps rows in a process-local ordered map. Used when no database is
//! configured and as the storage collaborator in tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use super::{
    entity::StudentEntity,
    repository::{CrudRepository, RepositoryError},
};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, StudentEntity>,
    last_id: i64,
}

/// Student repository backed by a `BTreeMap`
///
/// Ids are assigned from a counter starting at 1. Saving a row with an
/// explicit id higher than the counter moves the counter forward, so
/// generated ids never collide with explicit ones. Rows come back in
/// ascending id order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStudentRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryStudentRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Check if no rows are stored
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }
}

impl CrudRepository<StudentEntity, i64> for InMemoryStudentRepository {
    fn find_by_id(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<StudentEntity>, RepositoryError>> + Send
    {
        let table = self.table.clone();

        async move {
            let row = table.read().await.rows.get(&id).cloned();
            debug!(student_id = id, found = row.is_some(), "Loaded student row from memory");
            Ok(row)
        }
    }

    fn find_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<StudentEntity>, RepositoryError>> + Send {
        let table = self.table.clone();

        async move { Ok(table.read().await.rows.values().cloned().collect()) }
    }

    fn save(
        &self,
        entity: StudentEntity,
    ) -> impl std::future::Future<Output = Result<StudentEntity, RepositoryError>> + Send {
        let table = self.table.clone();

        async move {
            let mut table = table.write().await;

            let id = match entity.id {
                Some(id) => {
                    table.last_id = table.last_id.max(id);
                    id
                }
                None => {
                    table.last_id += 1;
                    table.last_id
                }
            };

            let stored = StudentEntity {
                id: Some(id),
                ..entity
            };
            table.rows.insert(id, stored.clone());

            info!(student_id = id, "Saved student row in memory");
            Ok(stored)
        }
    }

    fn delete_by_id(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send {
        let table = self.table.clone();

        async move {
            let removed = table.write().await.rows.remove(&id).is_some();
            debug!(student_id = id, removed, "Deleted student row from memory");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: Option<i64>, firstname: &str) -> StudentEntity {
        StudentEntity {
            id,
            firstname: firstname.to_string(),
            lastname: "Lopez".to_string(),
            age: 21,
            address: "Main St".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryStudentRepository::new();

        let first = repo.save(row(None, "Ana")).await.unwrap();
        let second = repo.save(row(None, "Beto")).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_save_with_id_updates_in_place() {
        let repo = InMemoryStudentRepository::new();

        repo.save(row(None, "Ana")).await.unwrap();
        let updated = repo.save(row(Some(1), "Anita")).await.unwrap();

        assert_eq!(updated.id, Some(1));
        assert_eq!(repo.len().await, 1);
        let found = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(found.firstname, "Anita");
    }

    #[tokio::test]
    async fn test_explicit_id_moves_counter_forward() {
        let repo = InMemoryStudentRepository::new();

        repo.save(row(Some(10), "Ana")).await.unwrap();
        let generated = repo.save(row(None, "Beto")).await.unwrap();

        assert_eq!(generated.id, Some(11));
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let repo = InMemoryStudentRepository::new();

        repo.save(row(Some(5), "Eva")).await.unwrap();
        repo.save(row(Some(2), "Beto")).await.unwrap();
        repo.save(row(Some(9), "Ivan")).await.unwrap();

        let ids: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![Some(2), Some(5), Some(9)]);
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_noop() {
        let repo = InMemoryStudentRepository::new();
        repo.save(row(None, "Ana")).await.unwrap();

        repo.delete_by_id(42).await.unwrap();

        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let repo = InMemoryStudentRepository::new();
        let saved = repo.save(row(None, "Ana")).await.unwrap();

        repo.delete_by_id(saved.id.unwrap()).await.unwrap();

        assert!(repo.find_by_id(1).await.unwrap().is_none());
        assert!(repo.is_empty().await);
    }
}
