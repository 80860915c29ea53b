//! # Student Persistence Adapter
//!
//! Implements the domain's `StudentPersistencePort` on top of a generic
//! storage repository. Two repositories are provided:
//!
//! - [`PgStudentRepository`]: PostgreSQL via sqlx
//! - [`InMemoryStudentRepository`]: process-local map, for tests and
//!   database-less runs

pub mod infrastructure;

pub use infrastructure::{
    CrudRepository, InMemoryStudentRepository, PgStudentRepository, RepositoryError,
    StudentEntity, StudentPersistenceAdapter, StudentRepository,
};
