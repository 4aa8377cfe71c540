use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::student::StudentRefDto;

/// Short group projection.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ShortGroupDto {
    pub group_id: i32,
    pub name: String,
}

/// Full group projection with nested short projections of member students.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FullGroupDto {
    pub group_id: i32,
    pub name: String,
    /// Member students ordered by student id.
    pub students: Vec<StudentRefDto>,
}

/// Minimal group reference nested inside the full student projection.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GroupRefDto {
    pub group_id: i32,
    pub name: String,
}

/// Creation payload for `POST /groups/{group_id}`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateGroupDto {
    /// Group name; must match the `AA-11` pattern.
    pub name: String,
}

/// Update payload for `PUT /groups/{group_id}`; absent fields are unchanged.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateGroupDto {
    #[serde(default)]
    pub name: Option<String>,
}
