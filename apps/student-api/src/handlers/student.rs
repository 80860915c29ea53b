//! Student handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use student_domain::{StudentId, StudentServicePort};
use tracing::info;

use crate::{
    dto::student::{ErrorResponse, StudentCreateRequest, StudentResponse},
    error::ApiError,
    mapper,
    validation::validate,
    AppState,
};

/// List every student
#[utoipa::path(
    get,
    path = "/students/v1/api",
    responses(
        (status = 200, description = "All stored students", body = [StudentResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn find_all<S: StudentServicePort>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let students = state.student_service.find_all().await?;
    info!(count = students.len(), "Listed students");

    Ok(Json(mapper::to_student_response_list(students)))
}

/// Fetch one student
#[utoipa::path(
    get,
    path = "/students/v1/api/{id}",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student found", body = StudentResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn find_by_id<S: StudentServicePort>(
    State(state): State<AppState<S>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<StudentResponse>, ApiError> {
    let Path(id) = id?;
    let student = state.student_service.find_by_id(StudentId::new(id)).await?;

    Ok(Json(mapper::to_student_response(student)))
}

/// Create a student
#[utoipa::path(
    post,
    path = "/students/v1/api",
    request_body = StudentCreateRequest,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 400, description = "Invalid student parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn create<S: StudentServicePort>(
    State(state): State<AppState<S>>,
    payload: Result<Json<StudentCreateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    let Json(payload) = payload?;
    let request = validate(payload)?;

    let saved = state
        .student_service
        .save(mapper::to_student(request))
        .await?;
    info!(student_id = ?saved.id, "Created student");

    Ok((StatusCode::CREATED, Json(mapper::to_student_response(saved))))
}

/// Replace the fields of a student
#[utoipa::path(
    put,
    path = "/students/v1/api/{id}",
    params(("id" = i64, Path, description = "Student id")),
    request_body = StudentCreateRequest,
    responses(
        (status = 200, description = "Student updated", body = StudentResponse),
        (status = 400, description = "Invalid student parameters", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn update<S: StudentServicePort>(
    State(state): State<AppState<S>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<StudentCreateRequest>, JsonRejection>,
) -> Result<Json<StudentResponse>, ApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let request = validate(payload)?;

    let updated = state
        .student_service
        .update(StudentId::new(id), mapper::to_student(request))
        .await?;
    info!(student_id = id, "Updated student");

    Ok(Json(mapper::to_student_response(updated)))
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/students/v1/api/{id}",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn delete<S: StudentServicePort>(
    State(state): State<AppState<S>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state
        .student_service
        .delete_by_id(StudentId::new(id))
        .await?;
    info!(student_id = id, "Deleted student");

    Ok(StatusCode::NO_CONTENT)
}
