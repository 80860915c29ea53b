//! Student routes

use axum::{routing::get, Router};
use student_domain::StudentServicePort;

use crate::{handlers::student, AppState};

/// Base path of the student resource
pub const STUDENTS_PATH: &str = "/students/v1/api";

/// Create student routes
pub fn routes<S>() -> Router<AppState<S>>
where
    S: StudentServicePort + 'static,
{
    Router::new()
        .route(
            STUDENTS_PATH,
            get(student::find_all::<S>).post(student::create::<S>),
        )
        .route(
            &format!("{STUDENTS_PATH}/:id"),
            get(student::find_by_id::<S>)
                .put(student::update::<S>)
                .delete(student::delete::<S>),
        )
}
