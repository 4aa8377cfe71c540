use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::ViewParams,
    dto::{
        api::{ErrorDto, StatusDto},
        student::{CreateStudentDto, FullStudentDto, ShortStudentDto, UpdateStudentDto},
    },
    error::AppError,
    model::student::{CreateStudentParams, Student, UpdateStudentParams},
    service::student::StudentService,
    state::AppState,
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// List all students.
///
/// Returns every student ordered by id. The `full` query flag selects between
/// the short projection (flattened group and course names) and the full
/// projection (nested group and course objects).
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - View parameters (`full`, default false)
///
/// # Returns
/// - `200 OK` - List of students in the requested projection
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students",
    tag = STUDENT_TAG,
    params(
        ("full" = Option<bool>, Query, description = "Return full projections (default: false)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<ShortStudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_students(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).list().await?;

    let response = if params.full {
        Json(
            students
                .into_iter()
                .map(Student::into_full_dto)
                .collect::<Vec<_>>(),
        )
        .into_response()
    } else {
        Json(
            students
                .into_iter()
                .map(Student::into_short_dto)
                .collect::<Vec<_>>(),
        )
        .into_response()
    };

    Ok((StatusCode::OK, response))
}

/// Get a single student by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `student_id` - Student id from the path
/// - `params` - View parameters (`full`, default false)
///
/// # Returns
/// - `200 OK` - Student in the requested projection
/// - `404 Not Found` - No student with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students/{student_id}",
    tag = STUDENT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student id"),
        ("full" = Option<bool>, Query, description = "Return the full projection (default: false)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = FullStudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
    Query(params): Query<ViewParams>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db).get(student_id).await?;

    let response = if params.full {
        Json(student.into_full_dto()).into_response()
    } else {
        Json(student.into_short_dto()).into_response()
    };

    Ok((StatusCode::OK, response))
}

/// Create a student.
///
/// The id comes from the path and is merged over the body. Supplied course ids
/// are resolved before the student is written; the row and its memberships are
/// committed in one transaction.
///
/// # Returns
/// - `200 OK` - Student created
/// - `400 Bad Request` - Id already exists, or a field fails validation
/// - `404 Not Found` - A supplied course id does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/students/{student_id}",
    tag = STUDENT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student id to create")
    ),
    request_body = CreateStudentDto,
    responses(
        (status = 200, description = "Successfully created student", body = StatusDto),
        (status = 400, description = "Duplicate id or invalid data", body = ErrorDto),
        (status = 404, description = "Referenced course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
    Json(payload): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateStudentParams::from_dto(student_id, payload);

    StudentService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto {
            status: 200,
            message: format!("Student with id '{}' has been successfully added", student_id),
        }),
    ))
}

/// Update a student.
///
/// Partial update: absent fields are left unchanged. Course membership changes
/// only through `add_courses`/`delete_courses`; a non-empty bare `courses`
/// list is rejected with 400.
///
/// # Returns
/// - `200 OK` - Student updated
/// - `400 Bad Request` - Bare `courses` list or invalid field
/// - `404 Not Found` - Student or a referenced course does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/students/{student_id}",
    tag = STUDENT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student id to update")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StatusDto),
        (status = 400, description = "Bare course list or invalid data", body = ErrorDto),
        (status = 404, description = "Student or referenced course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
    Json(payload): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateStudentParams::from_dto(student_id, payload);

    StudentService::new(&state.db).update(params).await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto {
            status: 200,
            message: format!(
                "Student with id '{}' has been successfully updated",
                student_id
            ),
        }),
    ))
}

/// Delete a student.
///
/// # Returns
/// - `200 OK` - Student deleted
/// - `404 Not Found` - No student with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/students/{student_id}",
    tag = STUDENT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student id to delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted student", body = StatusDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    StudentService::new(&state.db).delete(student_id).await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto {
            status: 200,
            message: format!(
                "Student with id '{}' has been successfully deleted",
                student_id
            ),
        }),
    ))
}
