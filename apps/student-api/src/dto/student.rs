//! DTOs for student endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating or replacing a student
///
/// Every field is optional on the wire so that missing values reach
/// validation and are reported together instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct StudentCreateRequest {
    #[schema(example = "Ana")]
    pub firstname: Option<String>,
    #[schema(example = "Lopez")]
    pub lastname: Option<String>,
    #[schema(example = 21)]
    pub age: Option<i32>,
    #[schema(example = "Main St")]
    pub address: Option<String>,
}

/// Response body describing a stored student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StudentResponse {
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "Ana")]
    pub firstname: String,
    #[schema(example = "Lopez")]
    pub lastname: String,
    #[schema(example = 21)]
    pub age: i32,
    #[schema(example = "Main St")]
    pub address: String,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Catalog code identifying the failure
    #[schema(example = "ERR_STUDENT_001")]
    pub code: String,
    /// Catalog message for the code
    #[schema(example = "Student not found.")]
    pub message: String,
    /// Individual problems, e.g. one entry per violated field constraint
    pub details: Vec<String>,
    pub timestamp: DateTime<Utc>,
}
