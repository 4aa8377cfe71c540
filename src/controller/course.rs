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
        course::{CreateCourseDto, FullCourseDto, ShortCourseDto, UpdateCourseDto},
    },
    error::AppError,
    model::course::{Course, CreateCourseParams, UpdateCourseParams},
    service::course::CourseService,
    state::AppState,
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// List all courses.
///
/// Returns every course ordered by id, in short or full projection depending
/// on the `full` query flag.
///
/// # Returns
/// - `200 OK` - List of courses in the requested projection
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/courses",
    tag = COURSE_TAG,
    params(
        ("full" = Option<bool>, Query, description = "Return full projections (default: false)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved courses", body = Vec<ShortCourseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Result<impl IntoResponse, AppError> {
    let courses = CourseService::new(&state.db).list().await?;

    let response = if params.full {
        Json(
            courses
                .into_iter()
                .map(Course::into_full_dto)
                .collect::<Vec<_>>(),
        )
        .into_response()
    } else {
        Json(
            courses
                .into_iter()
                .map(Course::into_short_dto)
                .collect::<Vec<_>>(),
        )
        .into_response()
    };

    Ok((StatusCode::OK, response))
}

/// Get a single course by id.
///
/// # Returns
/// - `200 OK` - Course in the requested projection
/// - `404 Not Found` - No course with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id"),
        ("full" = Option<bool>, Query, description = "Return the full projection (default: false)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved course", body = FullCourseDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
    Query(params): Query<ViewParams>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db).get(course_id).await?;

    let response = if params.full {
        Json(course.into_full_dto()).into_response()
    } else {
        Json(course.into_short_dto()).into_response()
    };

    Ok((StatusCode::OK, response))
}

/// Create a course.
///
/// The id comes from the path and is merged over the body.
///
/// # Returns
/// - `200 OK` - Course created
/// - `400 Bad Request` - Id already exists, or the name fails validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id to create")
    ),
    request_body = CreateCourseDto,
    responses(
        (status = 200, description = "Successfully created course", body = StatusDto),
        (status = 400, description = "Duplicate id or invalid data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
    Json(payload): Json<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateCourseParams::from_dto(course_id, payload);

    CourseService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto {
            status: 200,
            message: format!("Course with id '{}' has been successfully added", course_id),
        }),
    ))
}

/// Update a course.
///
/// Partial update: absent fields are left unchanged.
///
/// # Returns
/// - `200 OK` - Course updated
/// - `400 Bad Request` - Invalid field
/// - `404 Not Found` - No course with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id to update")
    ),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Successfully updated course", body = StatusDto),
        (status = 400, description = "Invalid course data", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
    Json(payload): Json<UpdateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateCourseParams::from_dto(course_id, payload);

    CourseService::new(&state.db).update(params).await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto {
            status: 200,
            message: format!(
                "Course with id '{}' has been successfully updated",
                course_id
            ),
        }),
    ))
}

/// Delete a course.
///
/// # Returns
/// - `200 OK` - Course deleted
/// - `404 Not Found` - No course with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id to delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted course", body = StatusDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    CourseService::new(&state.db).delete(course_id).await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto {
            status: 200,
            message: format!(
                "Course with id '{}' has been successfully deleted",
                course_id
            ),
        }),
    ))
}
