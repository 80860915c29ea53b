//! HTTP error mapping
//!
//! Every failure leaving a handler goes through `ApiError`, which picks the
//! status code and catalog entry and renders an `ErrorResponse` body.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use student_domain::StudentError;
use thiserror::Error;
use tracing::{error, warn};

use crate::{dto::student::ErrorResponse, validation::ValidationErrors};

/// Catalog of error codes exposed to API clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCatalog {
    StudentNotFound,
    InvalidStudent,
    GenericError,
}

impl ErrorCatalog {
    pub fn code(self) -> &'static str {
        match self {
            ErrorCatalog::StudentNotFound => "ERR_STUDENT_001",
            ErrorCatalog::InvalidStudent => "ERR_STUDENT_002",
            ErrorCatalog::GenericError => "ERR_GEN_001",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ErrorCatalog::StudentNotFound => "Student not found.",
            ErrorCatalog::InvalidStudent => "Invalid student parameters.",
            ErrorCatalog::GenericError => "An unexpected internal server error occurred.",
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            ErrorCatalog::StudentNotFound => StatusCode::NOT_FOUND,
            ErrorCatalog::InvalidStudent => StatusCode::BAD_REQUEST,
            ErrorCatalog::GenericError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Errors returned by handlers
#[derive(Error, Debug)]
pub enum ApiError {
    /// Failure reported by the application service
    #[error(transparent)]
    Domain(#[from] StudentError),

    /// Request body failed field validation
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// Request body was not acceptable JSON
    #[error("malformed body: {0}")]
    MalformedBody(String),

    /// Path parameter could not be parsed
    #[error("malformed path: {0}")]
    MalformedPath(String),
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::MalformedPath(rejection.body_text())
    }
}

impl ApiError {
    /// Catalog entry and details reported to the client
    fn describe(&self) -> (ErrorCatalog, Vec<String>) {
        match self {
            ApiError::Domain(StudentError::NotFound(id)) => (
                ErrorCatalog::StudentNotFound,
                vec![format!("No student with id {id}")],
            ),
            // Storage details stay in the logs.
            ApiError::Domain(StudentError::StorageFailure(_))
            | ApiError::Domain(StudentError::InternalError(_)) => {
                (ErrorCatalog::GenericError, Vec::new())
            }
            ApiError::Validation(errors) => (ErrorCatalog::InvalidStudent, errors.messages()),
            ApiError::MalformedBody(msg) | ApiError::MalformedPath(msg) => {
                (ErrorCatalog::InvalidStudent, vec![msg.clone()])
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (catalog, details) = self.describe();

        match &self {
            ApiError::Validation(errors) => {
                warn!(fields = ?errors.fields(), "Request failed validation");
            }
            _ if catalog == ErrorCatalog::GenericError => {
                error!(error = %self, "Request failed");
            }
            _ => warn!(error = %self, code = catalog.code(), "Request rejected"),
        }

        let body = ErrorResponse {
            code: catalog.code().to_string(),
            message: catalog.message().to_string(),
            details,
            timestamp: Utc::now(),
        };
        (catalog.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use student_domain::StudentId;

    use crate::{dto::student::StudentCreateRequest, validation::validate};

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response = ApiError::from(StudentError::not_found(StudentId::new(5))).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_of(response).await;
        assert_eq!(body.code, "ERR_STUDENT_001");
        assert_eq!(body.message, "Student not found.");
        assert_eq!(body.details, vec!["No student with id 5".to_string()]);
    }

    #[tokio::test]
    async fn test_validation_maps_to_400_with_every_violation() {
        let errors = validate(StudentCreateRequest::default()).unwrap_err();

        let response = ApiError::from(errors).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_of(response).await;
        assert_eq!(body.code, "ERR_STUDENT_002");
        assert_eq!(body.details.len(), 4);
    }

    #[tokio::test]
    async fn test_storage_failure_maps_to_500_without_details() {
        let response =
            ApiError::from(StudentError::storage_failure("password authentication failed"))
                .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(response).await;
        assert_eq!(body.code, "ERR_GEN_001");
        assert!(body.details.is_empty());
    }
}
