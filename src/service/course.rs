//! Course business logic.

use sea_orm::DatabaseConnection;

use crate::{
    data::course::CourseRepository,
    error::AppError,
    model::course::{Course, CreateCourseParams, UpdateCourseParams},
    util::validate,
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn not_found(course_id: i32) -> AppError {
        AppError::NotFound(format!("Course with id '{}' not found", course_id))
    }

    /// Gets a course with enrolled students loaded, or fails with 404.
    pub async fn get(&self, course_id: i32) -> Result<Course, AppError> {
        CourseRepository::new(self.db)
            .find_with_students(course_id)
            .await?
            .ok_or_else(|| Self::not_found(course_id))
    }

    /// Lists all courses ordered by id, with enrolled students loaded.
    pub async fn list(&self) -> Result<Vec<Course>, AppError> {
        Ok(CourseRepository::new(self.db).get_all().await?)
    }

    /// Creates a course. The id must not exist yet (400 Conflict otherwise);
    /// the name is bounded 1-50 characters.
    pub async fn create(&self, params: CreateCourseParams) -> Result<(), AppError> {
        validate::name_length("name", &params.name)?;

        let repo = CourseRepository::new(self.db);
        if repo.exists(params.course_id).await? {
            return Err(AppError::Conflict(format!(
                "Course with id '{}' already exists",
                params.course_id
            )));
        }

        repo.insert(&params).await?;
        Ok(())
    }

    /// Applies a partial update to a course, or fails with 404.
    pub async fn update(&self, params: UpdateCourseParams) -> Result<(), AppError> {
        validate::optional_name_length("name", params.name.as_deref())?;

        let repo = CourseRepository::new(self.db);
        let course = repo
            .find_by_id(params.course_id)
            .await?
            .ok_or_else(|| Self::not_found(params.course_id))?;

        repo.update(course, &params).await?;
        Ok(())
    }

    /// Deletes a course, or fails with 404. Student memberships cascade.
    pub async fn delete(&self, course_id: i32) -> Result<(), AppError> {
        let repo = CourseRepository::new(self.db);
        let course = repo
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| Self::not_found(course_id))?;

        repo.delete(course).await?;
        Ok(())
    }
}
