//! API routes

pub mod student;

use axum::Router;
use student_domain::StudentServicePort;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dto::student::{ErrorResponse, StudentCreateRequest, StudentResponse},
    handlers, AppState,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::student::find_all,
        handlers::student::find_by_id,
        handlers::student::create,
        handlers::student::update,
        handlers::student::delete,
        health_handler
    ),
    components(
        schemas(StudentCreateRequest, StudentResponse, ErrorResponse)
    ),
    tags(
        (name = "students", description = "Student management endpoints"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "Student API",
        version = "0.1.0",
        description = "CRUD service for the student resource",
        contact(
            name = "Student Service Team"
        )
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: StudentServicePort + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(student::routes())
        .route("/health", axum::routing::get(health_handler))
        .with_state(state)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    ),
    tag = "health"
)]
async fn health_handler() -> &'static str {
    "OK"
}
