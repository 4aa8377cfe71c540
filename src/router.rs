//! Axum route configuration and API documentation.
//!
//! Routes are registered through `utoipa_axum::OpenApiRouter` so the OpenAPI
//! document is assembled from the same `#[utoipa::path]` declarations as the
//! routing table. Swagger UI serves the document at `/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{course, group, student},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "University API",
        description = "CRUD API over students, courses and groups"
    ),
    tags(
        (name = "student", description = "Student management endpoints"),
        (name = "course", description = "Course management endpoints"),
        (name = "group", description = "Group management endpoints")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(student::list_students))
        .routes(routes!(
            student::get_student,
            student::create_student,
            student::update_student,
            student::delete_student
        ))
        .routes(routes!(course::list_courses))
        .routes(routes!(
            course::get_course,
            course::create_course,
            course::update_course,
            course::delete_course
        ))
        .routes(routes!(group::list_groups))
        .routes(routes!(
            group::get_group,
            group::create_group,
            group::update_group,
            group::delete_group
        ))
        .split_for_parts();

    router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
}
