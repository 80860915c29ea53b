//! # Student Domain Layer
//!
//! This crate contains the domain model and the application contracts for the
//! student service. It follows hexagonal architecture principles:
//!
//! - **Entities**: Core domain models (Student)
//! - **Ports**: Trait definitions for both sides of the hexagon
//!   (`StudentServicePort` for inbound adapters, `StudentPersistencePort` for storage)
//! - **Services**: `StudentService`, the input port implemented on top of the output port
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (SQL, HTTP, etc.).
//! Adapters live in their own crates and are wired together explicitly by the
//! application's startup routine.
//!
//! ## Example
//!
//! ```rust
//! use student_domain::{Student, StudentServicePort};
//!
//! async fn example<S: StudentServicePort>(service: S) {
//!     let student = Student::new("Ana", "Lopez", 21, "Main St");
//!     let saved = service.save(student).await.unwrap();
//!     println!("Saved student: {:?}", saved.id);
//! }
//! ```

pub mod ports;
pub mod student;

// Re-export commonly used types
pub use ports::StudentPersistencePort;
pub use student::{Result, Student, StudentError, StudentId, StudentService, StudentServicePort};
