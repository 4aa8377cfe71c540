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
        group::{CreateGroupDto, FullGroupDto, ShortGroupDto, UpdateGroupDto},
    },
    error::AppError,
    model::group::{CreateGroupParams, Group, UpdateGroupParams},
    service::group::GroupService,
    state::AppState,
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

/// List all groups.
///
/// Returns every group ordered by id, in short or full projection depending
/// on the `full` query flag.
///
/// # Returns
/// - `200 OK` - List of groups in the requested projection
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/groups",
    tag = GROUP_TAG,
    params(
        ("full" = Option<bool>, Query, description = "Return full projections (default: false)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved groups", body = Vec<ShortGroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_groups(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Result<impl IntoResponse, AppError> {
    let groups = GroupService::new(&state.db).list().await?;

    let response = if params.full {
        Json(
            groups
                .into_iter()
                .map(Group::into_full_dto)
                .collect::<Vec<_>>(),
        )
        .into_response()
    } else {
        Json(
            groups
                .into_iter()
                .map(Group::into_short_dto)
                .collect::<Vec<_>>(),
        )
        .into_response()
    };

    Ok((StatusCode::OK, response))
}

/// Get a single group by id.
///
/// # Returns
/// - `200 OK` - Group in the requested projection
/// - `404 Not Found` - No group with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/groups/{group_id}",
    tag = GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Group id"),
        ("full" = Option<bool>, Query, description = "Return the full projection (default: false)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved group", body = FullGroupDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    Path(group_id): Path<i32>,
    Query(params): Query<ViewParams>,
) -> Result<impl IntoResponse, AppError> {
    let group = GroupService::new(&state.db).get(group_id).await?;

    let response = if params.full {
        Json(group.into_full_dto()).into_response()
    } else {
        Json(group.into_short_dto()).into_response()
    };

    Ok((StatusCode::OK, response))
}

/// Create a group.
///
/// The id comes from the path and is merged over the body. The name must
/// match the `AA-11` pattern.
///
/// # Returns
/// - `200 OK` - Group created
/// - `400 Bad Request` - Id already exists, or the name fails validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/groups/{group_id}",
    tag = GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Group id to create")
    ),
    request_body = CreateGroupDto,
    responses(
        (status = 200, description = "Successfully created group", body = StatusDto),
        (status = 400, description = "Duplicate id or invalid data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    Path(group_id): Path<i32>,
    Json(payload): Json<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateGroupParams::from_dto(group_id, payload);

    GroupService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto {
            status: 200,
            message: format!("Group with id '{}' has been successfully added", group_id),
        }),
    ))
}

/// Update a group.
///
/// Partial update: absent fields are left unchanged.
///
/// # Returns
/// - `200 OK` - Group updated
/// - `400 Bad Request` - Invalid group name
/// - `404 Not Found` - No group with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/groups/{group_id}",
    tag = GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Group id to update")
    ),
    request_body = UpdateGroupDto,
    responses(
        (status = 200, description = "Successfully updated group", body = StatusDto),
        (status = 400, description = "Invalid group data", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_group(
    State(state): State<AppState>,
    Path(group_id): Path<i32>,
    Json(payload): Json<UpdateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateGroupParams::from_dto(group_id, payload);

    GroupService::new(&state.db).update(params).await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto {
            status: 200,
            message: format!("Group with id '{}' has been successfully updated", group_id),
        }),
    ))
}

/// Delete a group.
///
/// Member students are kept; the database clears their `group_id`.
///
/// # Returns
/// - `200 OK` - Group deleted
/// - `404 Not Found` - No group with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/groups/{group_id}",
    tag = GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Group id to delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted group", body = StatusDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    Path(group_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    GroupService::new(&state.db).delete(group_id).await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto {
            status: 200,
            message: format!("Group with id '{}' has been successfully deleted", group_id),
        }),
    ))
}
