use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::{course::CourseRefDto, group::GroupRefDto};

/// Short student projection: identity and display fields only.
///
/// Relationship data is flattened to plain strings; short projections never
/// contain nested objects.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ShortStudentDto {
    pub student_id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Name of the student's group, or null when ungrouped.
    pub group_name: Option<String>,
    /// Comma-joined course names, or null when the student has no courses.
    pub course_names: Option<String>,
}

/// Full student projection: every column plus nested short projections of
/// the related group and courses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FullStudentDto {
    pub student_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub group_id: Option<i32>,
    pub group: Option<GroupRefDto>,
    /// Enrolled courses ordered by course id.
    pub courses: Vec<CourseRefDto>,
}

/// Minimal student reference nested inside full course and group projections.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StudentRefDto {
    pub student_id: i32,
    pub first_name: String,
    pub last_name: String,
}

/// Creation payload for `POST /students/{student_id}`.
///
/// The student id comes from the path and is merged over the body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStudentDto {
    pub first_name: String,
    pub last_name: String,
    /// Group to assign the student to; must reference an existing group.
    #[serde(default)]
    pub group_id: Option<i32>,
    /// Course ids to enroll the student in; each is resolved or the request
    /// fails with 404.
    #[serde(default)]
    pub courses: Option<Vec<i32>>,
}

/// Update payload for `PUT /students/{student_id}`.
///
/// All fields are optional; absent fields are left unchanged. Course
/// membership is changed only through the explicit `add_courses` and
/// `delete_courses` lists - a non-empty bare `courses` list is rejected.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStudentDto {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub group_id: Option<i32>,
    /// Rejected when non-empty; present for the explicit 400 contract.
    #[serde(default)]
    pub courses: Option<Vec<i32>>,
    /// Course ids to add to the student's course set (idempotent union).
    #[serde(default)]
    pub add_courses: Option<Vec<i32>>,
    /// Course ids to remove from the student's course set (absent ids are no-ops).
    #[serde(default)]
    pub delete_courses: Option<Vec<i32>>,
}
