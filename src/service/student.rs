//! Student business logic: lookups, creation, partial updates with course
//! membership changes, and deletion.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{course::CourseRepository, student::StudentRepository},
    error::AppError,
    model::student::{CreateStudentParams, Student, UpdateStudentParams},
    util::validate::{self, Operation},
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn not_found(student_id: i32) -> AppError {
        AppError::NotFound(format!("Student with id '{}' not found", student_id))
    }

    /// Resolves a list of course ids, failing with 404 on the first unknown id.
    ///
    /// Both `add_courses` and `delete_courses` go through this lookup: removing
    /// an unassigned course is a no-op, but naming a nonexistent course is an
    /// error, matching the create-time behavior.
    async fn resolve_courses(&self, course_ids: &[i32]) -> Result<Vec<i32>, AppError> {
        let repo = CourseRepository::new(self.db);

        for &course_id in course_ids {
            if !repo.exists(course_id).await? {
                return Err(AppError::NotFound(format!(
                    "Course with id '{}' not found",
                    course_id
                )));
            }
        }

        Ok(course_ids.to_vec())
    }

    /// Gets a student with relations loaded, or fails with 404.
    pub async fn get(&self, student_id: i32) -> Result<Student, AppError> {
        StudentRepository::new(self.db)
            .find_with_relations(student_id)
            .await?
            .ok_or_else(|| Self::not_found(student_id))
    }

    /// Lists all students ordered by id, with relations loaded.
    pub async fn list(&self) -> Result<Vec<Student>, AppError> {
        Ok(StudentRepository::new(self.db).get_all().await?)
    }

    /// Creates a student.
    ///
    /// Create-time rules:
    /// - both name fields mandatory and 1-50 characters
    /// - the id must not exist yet (400 Conflict otherwise)
    /// - every supplied course id must resolve (404 otherwise)
    ///
    /// The student row and its course memberships are written in one
    /// transaction. A dangling `group_id` surfaces as an integrity error from
    /// the foreign key.
    pub async fn create(&self, params: CreateStudentParams) -> Result<(), AppError> {
        validate::student_fields(
            Operation::Create,
            Some(&params.first_name),
            Some(&params.last_name),
        )?;

        let repo = StudentRepository::new(self.db);
        if repo.exists(params.student_id).await? {
            return Err(AppError::Conflict(format!(
                "Student with id '{}' already exists",
                params.student_id
            )));
        }

        let courses = match &params.courses {
            Some(course_ids) => self.resolve_courses(course_ids).await?,
            None => Vec::new(),
        };

        let txn = self.db.begin().await?;
        let repo = StudentRepository::new(&txn);

        repo.insert(&params).await?;
        repo.attach_courses(params.student_id, &courses).await?;

        txn.commit().await?;
        Ok(())
    }

    /// Applies a partial update to a student.
    ///
    /// Update-time rules:
    /// - the student must exist (404 otherwise)
    /// - a non-empty bare `courses` list is rejected (400); membership changes
    ///   go through `add_courses`/`delete_courses`
    /// - provided name fields are bounded 1-50 characters
    /// - both course lists resolve or-404 before anything is written
    ///
    /// Field updates, the idempotent course union, and the set-semantics course
    /// removal run in one transaction.
    pub async fn update(&self, params: UpdateStudentParams) -> Result<(), AppError> {
        let repo = StudentRepository::new(self.db);
        let student = repo
            .find_by_id(params.student_id)
            .await?
            .ok_or_else(|| Self::not_found(params.student_id))?;

        if params.courses.as_ref().is_some_and(|ids| !ids.is_empty()) {
            return Err(AppError::Validation(
                "Field 'courses' cannot be updated directly, \
                 use 'add_courses' or 'delete_courses' instead"
                    .to_string(),
            ));
        }

        validate::student_fields(
            Operation::Update,
            params.first_name.as_deref(),
            params.last_name.as_deref(),
        )?;

        let add_courses = match &params.add_courses {
            Some(course_ids) => self.resolve_courses(course_ids).await?,
            None => Vec::new(),
        };
        let delete_courses = match &params.delete_courses {
            Some(course_ids) => self.resolve_courses(course_ids).await?,
            None => Vec::new(),
        };

        let txn = self.db.begin().await?;
        let repo = StudentRepository::new(&txn);

        repo.update(student, &params).await?;
        repo.attach_courses(params.student_id, &add_courses).await?;
        repo.detach_courses(params.student_id, &delete_courses)
            .await?;

        txn.commit().await?;
        Ok(())
    }

    /// Deletes a student, or fails with 404. Course memberships cascade.
    pub async fn delete(&self, student_id: i32) -> Result<(), AppError> {
        let repo = StudentRepository::new(self.db);
        let student = repo
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| Self::not_found(student_id))?;

        repo.delete(student).await?;
        Ok(())
    }
}
