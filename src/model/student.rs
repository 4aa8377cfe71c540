//! Student domain models and parameters.

use crate::{
    dto::{
        course::CourseRefDto,
        group::GroupRefDto,
        student::{
            CreateStudentDto, FullStudentDto, ShortStudentDto, StudentRefDto, UpdateStudentDto,
        },
    },
    model::{course::CourseRef, group::GroupRef},
};

/// Student with its loaded relationships.
///
/// `group` and `courses` are populated by the repository when the student is
/// fetched; courses are ordered by course id.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub student_id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Foreign key to the student's group, if any.
    pub group_id: Option<i32>,
    /// The student's group, if any.
    pub group: Option<GroupRef>,
    /// Courses the student is enrolled in, ordered by course id.
    pub courses: Vec<CourseRef>,
}

impl Student {
    /// Builds a student domain model from an entity and its loaded relations
    /// at the repository boundary.
    pub fn from_entity(
        student: entity::student::Model,
        group: Option<entity::group::Model>,
        courses: Vec<entity::course::Model>,
    ) -> Self {
        Self {
            student_id: student.student_id,
            first_name: student.first_name,
            last_name: student.last_name,
            group_id: student.group_id,
            group: group.map(GroupRef::from_entity),
            courses: courses.into_iter().map(CourseRef::from_entity).collect(),
        }
    }

    /// Converts to the short projection.
    ///
    /// Relationships are flattened: the group becomes its name, courses become
    /// a comma-joined name string (null when the student has no courses).
    pub fn into_short_dto(self) -> ShortStudentDto {
        let course_names = if self.courses.is_empty() {
            None
        } else {
            Some(
                self.courses
                    .iter()
                    .map(|course| course.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        };

        ShortStudentDto {
            student_id: self.student_id,
            first_name: self.first_name,
            last_name: self.last_name,
            group_name: self.group.map(|group| group.name),
            course_names,
        }
    }

    /// Converts to the full projection with nested group and course objects.
    pub fn into_full_dto(self) -> FullStudentDto {
        FullStudentDto {
            student_id: self.student_id,
            first_name: self.first_name,
            last_name: self.last_name,
            group_id: self.group_id,
            group: self.group.map(|group| GroupRefDto {
                group_id: group.group_id,
                name: group.name,
            }),
            courses: self
                .courses
                .into_iter()
                .map(|course| CourseRefDto {
                    course_id: course.course_id,
                    name: course.name,
                })
                .collect(),
        }
    }
}

/// Minimal student reference nested inside full course and group projections.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRef {
    pub student_id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl StudentRef {
    pub fn from_entity(student: entity::student::Model) -> Self {
        Self {
            student_id: student.student_id,
            first_name: student.first_name,
            last_name: student.last_name,
        }
    }

    pub fn into_dto(self) -> StudentRefDto {
        StudentRefDto {
            student_id: self.student_id,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

/// Parameters for creating a student.
#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    /// Client-assigned id, taken from the request path.
    pub student_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub group_id: Option<i32>,
    /// Course ids to enroll in; each is resolved or the request fails with 404.
    pub courses: Option<Vec<i32>>,
}

impl CreateStudentParams {
    /// Merges the path id over the request body.
    pub fn from_dto(student_id: i32, dto: CreateStudentDto) -> Self {
        Self {
            student_id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            group_id: dto.group_id,
            courses: dto.courses,
        }
    }
}

/// Parameters for a partial student update.
///
/// `None` fields are left unchanged. Course membership changes only through
/// `add_courses`/`delete_courses`; a non-empty `courses` list is rejected by
/// the service layer.
#[derive(Debug, Clone)]
pub struct UpdateStudentParams {
    pub student_id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub group_id: Option<i32>,
    pub courses: Option<Vec<i32>>,
    pub add_courses: Option<Vec<i32>>,
    pub delete_courses: Option<Vec<i32>>,
}

impl UpdateStudentParams {
    /// Merges the path id over the request body.
    pub fn from_dto(student_id: i32, dto: UpdateStudentDto) -> Self {
        Self {
            student_id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            group_id: dto.group_id,
            courses: dto.courses,
            add_courses: dto.add_courses,
            delete_courses: dto.delete_courses,
        }
    }
}
