//! Course domain models and parameters.

use crate::{
    dto::course::{CreateCourseDto, FullCourseDto, ShortCourseDto, UpdateCourseDto},
    model::student::StudentRef,
};

/// Course with its enrolled students loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub course_id: i32,
    pub name: String,
    pub description: String,
    /// Enrolled students ordered by student id.
    pub students: Vec<StudentRef>,
}

impl Course {
    /// Builds a course domain model from an entity and its loaded students.
    pub fn from_entity(
        course: entity::course::Model,
        students: Vec<entity::student::Model>,
    ) -> Self {
        Self {
            course_id: course.course_id,
            name: course.name,
            description: course.description,
            students: students.into_iter().map(StudentRef::from_entity).collect(),
        }
    }

    pub fn into_short_dto(self) -> ShortCourseDto {
        ShortCourseDto {
            course_id: self.course_id,
            name: self.name,
        }
    }

    pub fn into_full_dto(self) -> FullCourseDto {
        FullCourseDto {
            course_id: self.course_id,
            name: self.name,
            description: self.description,
            students: self
                .students
                .into_iter()
                .map(StudentRef::into_dto)
                .collect(),
        }
    }
}

/// Minimal course reference nested inside the full student projection.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseRef {
    pub course_id: i32,
    pub name: String,
}

impl CourseRef {
    pub fn from_entity(course: entity::course::Model) -> Self {
        Self {
            course_id: course.course_id,
            name: course.name,
        }
    }
}

/// Parameters for creating a course.
#[derive(Debug, Clone)]
pub struct CreateCourseParams {
    /// Client-assigned id, taken from the request path.
    pub course_id: i32,
    pub name: String,
    pub description: String,
}

impl CreateCourseParams {
    /// Merges the path id over the request body. A missing description
    /// defaults to an empty string.
    pub fn from_dto(course_id: i32, dto: CreateCourseDto) -> Self {
        Self {
            course_id,
            name: dto.name,
            description: dto.description.unwrap_or_default(),
        }
    }
}

/// Parameters for a partial course update; `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateCourseParams {
    pub course_id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateCourseParams {
    /// Merges the path id over the request body.
    pub fn from_dto(course_id: i32, dto: UpdateCourseDto) -> Self {
        Self {
            course_id,
            name: dto.name,
            description: dto.description,
        }
    }
}
