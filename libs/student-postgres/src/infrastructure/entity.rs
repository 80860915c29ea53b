//! Storage record for the `students` table

/// Row of the `students` table
///
/// Mirrors the domain `Student` field for field. `id` is `None` only for rows
/// that have not been inserted yet.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct StudentEntity {
    pub id: Option<i64>,
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
    pub address: String,
}
