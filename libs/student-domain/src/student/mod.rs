//! Student domain module
//!
//! This module contains the Student entity, its identifier, the domain errors
//! and the application service exposed to inbound adapters.

pub mod entity;
pub mod error;
pub mod ids;
pub mod ports;
pub mod service;

pub use entity::Student;
pub use error::{Result, StudentError};
pub use ids::StudentId;
pub use ports::StudentServicePort;
pub use service::StudentService;
