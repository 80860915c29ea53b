//! Storage records, mapping and repositories backing the persistence port

pub mod entity;
pub mod mapper;
pub mod memory_repository;
pub mod persistence_adapter;
pub mod postgres_repository;
pub mod repository;

pub use entity::StudentEntity;
pub use memory_repository::InMemoryStudentRepository;
pub use persistence_adapter::StudentPersistenceAdapter;
pub use postgres_repository::PgStudentRepository;
pub use repository::{CrudRepository, RepositoryError, StudentRepository};
