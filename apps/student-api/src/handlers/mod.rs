//! HTTP handlers

pub mod student;
