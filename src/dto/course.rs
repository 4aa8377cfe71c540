use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::student::StudentRefDto;

/// Short course projection.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ShortCourseDto {
    pub course_id: i32,
    pub name: String,
}

/// Full course projection with nested short projections of enrolled students.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FullCourseDto {
    pub course_id: i32,
    pub name: String,
    pub description: String,
    /// Enrolled students ordered by student id.
    pub students: Vec<StudentRefDto>,
}

/// Minimal course reference nested inside the full student projection.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CourseRefDto {
    pub course_id: i32,
    pub name: String,
}

/// Creation payload for `POST /courses/{course_id}`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCourseDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Update payload for `PUT /courses/{course_id}`; absent fields are unchanged.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCourseDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
