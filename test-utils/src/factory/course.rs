//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses with customizable fields.
///
/// Provides a builder pattern for creating course entities with default values
/// that can be overridden as needed for specific test scenarios.
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    course_id: i32,
    name: String,
    description: String,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - course_id: auto-incremented counter value
    /// - name: `"Course {id}"`
    /// - description: `"Description {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id() as i32;
        Self {
            db,
            course_id: id,
            name: format!("Course {}", id),
            description: format!("Description {}", id),
        }
    }

    /// Sets the course id.
    pub fn course_id(mut self, course_id: i32) -> Self {
        self.course_id = course_id;
        self
    }

    /// Sets the course name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the course description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds and inserts the course entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::course::Model)` - Created course entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            course_id: ActiveValue::Set(self.course_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await
    }
}
