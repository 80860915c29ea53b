//! Wire shapes for the REST API

pub mod student;
