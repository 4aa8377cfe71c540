//! Student factory for creating test student entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// Provides a builder pattern for creating student entities with default values
/// that can be overridden as needed. Course enrollments registered via `course()`
/// are inserted into the join table after the student row.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::StudentFactory;
///
/// let student = StudentFactory::new(&db)
///     .student_id(5)
///     .first_name("Jo")
///     .last_name("Do")
///     .group_id(group.group_id)
///     .course(course.course_id)
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    first_name: String,
    last_name: String,
    group_id: Option<i32>,
    course_ids: Vec<i32>,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - student_id: auto-incremented counter value
    /// - first_name: `"First{id}"`
    /// - last_name: `"Last{id}"`
    /// - group_id: `None`
    /// - no course enrollments
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id() as i32;
        Self {
            db,
            student_id: id,
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            group_id: None,
            course_ids: Vec::new(),
        }
    }

    /// Sets the student id.
    pub fn student_id(mut self, student_id: i32) -> Self {
        self.student_id = student_id;
        self
    }

    /// Sets the first name.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the last name.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Assigns the student to a group. The group must already exist.
    pub fn group_id(mut self, group_id: i32) -> Self {
        self.group_id = Some(group_id);
        self
    }

    /// Enrolls the student in a course. The course must already exist.
    /// Can be called multiple times.
    pub fn course(mut self, course_id: i32) -> Self {
        self.course_ids.push(course_id);
        self
    }

    /// Builds and inserts the student entity plus its course enrollments.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        let student = entity::student::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            group_id: ActiveValue::Set(self.group_id),
        }
        .insert(self.db)
        .await?;

        for course_id in self.course_ids {
            entity::student_course::ActiveModel {
                student_id: ActiveValue::Set(student.student_id),
                course_id: ActiveValue::Set(course_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(student)
    }
}
