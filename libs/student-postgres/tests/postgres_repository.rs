//! Integration tests for the PostgreSQL repository
//!
//! These tests need a reachable PostgreSQL instance. They read its URL from
//! `DATABASE_URL` and return early when it is not set.
//!
//! Each test works on rows it created itself, so they can run against a
//! shared database.

use student_domain::{Student, StudentError, StudentService, StudentServicePort};
use student_postgres::{
    CrudRepository, PgStudentRepository, StudentEntity, StudentPersistenceAdapter,
};

async fn repository() -> Option<PgStudentRepository> {
    let url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("DATABASE_URL not set, skipping PostgreSQL test");
            return None;
        }
    };

    let repo = PgStudentRepository::connect(&url, 2)
        .await
        .expect("Failed to connect to PostgreSQL");
    Some(repo)
}

fn row(firstname: &str, age: i32) -> StudentEntity {
    StudentEntity {
        id: None,
        firstname: firstname.to_string(),
        lastname: "Lopez".to_string(),
        age,
        address: "Main St".to_string(),
    }
}

#[tokio::test]
async fn test_insert_assigns_id_and_reads_back() {
    let Some(repo) = repository().await else {
        return;
    };

    let saved = repo.save(row("Ana", 21)).await.expect("insert succeeds");
    let id = saved.id.expect("database assigns an id");

    let found = repo
        .find_by_id(id)
        .await
        .expect("lookup succeeds")
        .expect("row exists");
    assert_eq!(found, saved);

    repo.delete_by_id(id).await.expect("delete succeeds");
}

#[tokio::test]
async fn test_save_with_id_updates_row() {
    let Some(repo) = repository().await else {
        return;
    };

    let saved = repo.save(row("Ana", 21)).await.expect("insert succeeds");
    let id = saved.id.expect("database assigns an id");

    let updated = repo
        .save(StudentEntity {
            age: 22,
            ..saved.clone()
        })
        .await
        .expect("update succeeds");

    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.age, 22);

    repo.delete_by_id(id).await.expect("delete succeeds");
}

#[tokio::test]
async fn test_delete_then_find_returns_none() {
    let Some(repo) = repository().await else {
        return;
    };

    let saved = repo.save(row("Beto", 30)).await.expect("insert succeeds");
    let id = saved.id.expect("database assigns an id");

    repo.delete_by_id(id).await.expect("delete succeeds");
    repo.delete_by_id(id).await.expect("second delete is a no-op");

    assert!(repo.find_by_id(id).await.expect("lookup succeeds").is_none());
}

#[tokio::test]
async fn test_find_all_contains_saved_rows_in_id_order() {
    let Some(repo) = repository().await else {
        return;
    };

    let first = repo.save(row("Carla", 19)).await.expect("insert succeeds");
    let second = repo.save(row("Dario", 20)).await.expect("insert succeeds");

    let rows = repo.find_all().await.expect("listing succeeds");
    let ids: Vec<_> = rows.iter().filter_map(|r| r.id).collect();

    let first_pos = ids.iter().position(|id| Some(*id) == first.id);
    let second_pos = ids.iter().position(|id| Some(*id) == second.id);
    assert!(first_pos.is_some() && second_pos.is_some());
    assert!(first_pos < second_pos, "rows come back ordered by id");

    for id in [first.id, second.id].into_iter().flatten() {
        repo.delete_by_id(id).await.expect("delete succeeds");
    }
}

#[tokio::test]
async fn test_service_scenario_over_postgres() {
    let Some(repo) = repository().await else {
        return;
    };
    let service = StudentService::new(StudentPersistenceAdapter::new(repo));

    let saved = service
        .save(Student::new("Ana", "Lopez", 21, "Main St"))
        .await
        .expect("save succeeds");
    let id = saved.id.expect("database assigns an id");

    let updated = service
        .update(id, Student::new("Ana", "Lopez", 22, "Main St"))
        .await
        .expect("update succeeds");
    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.age, 22);

    service.delete_by_id(id).await.expect("delete succeeds");
    assert!(matches!(
        service.find_by_id(id).await,
        Err(StudentError::NotFound(_))
    ));
}
