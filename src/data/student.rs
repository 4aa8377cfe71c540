//! Student data repository for database operations.
//!
//! This module provides the `StudentRepository` for managing student records and their
//! course memberships. It handles queries, relation loading, mutation, and join-table
//! maintenance with conversion between entity models and domain models at the
//! infrastructure boundary.

use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, LoaderTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::student::{CreateStudentParams, Student, UpdateStudentParams};

/// Repository providing database operations for student management.
pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    /// Creates a new StudentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a student entity by id, without loading relations.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Student found
    /// - `Ok(None)` - No student with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, student_id: i32) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find_by_id(student_id)
            .one(self.db)
            .await
    }

    /// Finds a student with its group and ordered course list loaded.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student with relations as a domain model
    /// - `Ok(None)` - No student with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_relations(&self, student_id: i32) -> Result<Option<Student>, DbErr> {
        let Some(student) = self.find_by_id(student_id).await? else {
            return Ok(None);
        };

        let group = student
            .find_related(entity::prelude::Group)
            .one(self.db)
            .await?;
        let courses = student
            .find_related(entity::prelude::Course)
            .order_by_asc(entity::course::Column::CourseId)
            .all(self.db)
            .await?;

        Ok(Some(Student::from_entity(student, group, courses)))
    }

    /// Gets all students ordered by id, with groups and courses loaded.
    ///
    /// Relations are batch-loaded with SeaORM's loader to avoid one query per
    /// student; course lists are sorted by course id for deterministic output.
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - All students as domain models (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Student>, DbErr> {
        let students = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::StudentId)
            .all(self.db)
            .await?;

        let groups = students.load_one(entity::prelude::Group, self.db).await?;
        let mut courses = students
            .load_many_to_many(
                entity::prelude::Course,
                entity::prelude::StudentCourse,
                self.db,
            )
            .await?;
        for list in &mut courses {
            list.sort_by_key(|course| course.course_id);
        }

        Ok(students
            .into_iter()
            .zip(groups)
            .zip(courses)
            .map(|((student, group), courses)| Student::from_entity(student, group, courses))
            .collect())
    }

    /// Gets the maximum student id, or 0 when the table is empty.
    pub async fn get_max_id(&self) -> Result<i32, DbErr> {
        let max: Option<Option<i32>> = entity::prelude::Student::find()
            .select_only()
            .column_as(entity::student::Column::StudentId.max(), "max_id")
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(max.flatten().unwrap_or(0))
    }

    /// Checks whether a student with the given id exists.
    pub async fn exists(&self, student_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Student::find()
            .filter(entity::student::Column::StudentId.eq(student_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new student row from creation parameters.
    ///
    /// Course membership is not touched here; use `attach_courses` afterwards,
    /// inside the same transaction.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted student entity
    /// - `Err(DbErr)` - Database error, including constraint violations
    pub async fn insert(&self, params: &CreateStudentParams) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            student_id: ActiveValue::Set(params.student_id),
            first_name: ActiveValue::Set(params.first_name.clone()),
            last_name: ActiveValue::Set(params.last_name.clone()),
            group_id: ActiveValue::Set(params.group_id),
        }
        .insert(self.db)
        .await
    }

    /// Applies a partial update to an existing student row.
    ///
    /// Only the fields present in `params` are written; when no field is
    /// provided the row is returned untouched and no statement is issued.
    ///
    /// # Arguments
    /// - `student` - The current row, previously fetched by the caller
    /// - `params` - Update parameters; `None` fields are left unchanged
    pub async fn update(
        &self,
        student: entity::student::Model,
        params: &UpdateStudentParams,
    ) -> Result<entity::student::Model, DbErr> {
        let mut active: entity::student::ActiveModel = student.clone().into();
        let mut dirty = false;

        if let Some(first_name) = &params.first_name {
            active.first_name = ActiveValue::Set(first_name.clone());
            dirty = true;
        }
        if let Some(last_name) = &params.last_name {
            active.last_name = ActiveValue::Set(last_name.clone());
            dirty = true;
        }
        if let Some(group_id) = params.group_id {
            active.group_id = ActiveValue::Set(Some(group_id));
            dirty = true;
        }

        if !dirty {
            return Ok(student);
        }

        active.update(self.db).await
    }

    /// Deletes a student row. Join-table rows cascade at the database level.
    pub async fn delete(&self, student: entity::student::Model) -> Result<(), DbErr> {
        student.delete(self.db).await?;
        Ok(())
    }

    /// Adds courses to a student's course set.
    ///
    /// Insertion ignores conflicts on the (student, course) pair, so attaching
    /// an already-assigned course is a no-op and the union is idempotent.
    ///
    /// # Arguments
    /// - `student_id` - The student to enroll
    /// - `course_ids` - Course ids to add; the caller has already resolved them
    pub async fn attach_courses(&self, student_id: i32, course_ids: &[i32]) -> Result<(), DbErr> {
        if course_ids.is_empty() {
            return Ok(());
        }

        let rows = course_ids
            .iter()
            .map(|&course_id| entity::student_course::ActiveModel {
                student_id: ActiveValue::Set(student_id),
                course_id: ActiveValue::Set(course_id),
            });

        entity::prelude::StudentCourse::insert_many(rows)
            .on_conflict(
                OnConflict::columns([
                    entity::student_course::Column::StudentId,
                    entity::student_course::Column::CourseId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Removes courses from a student's course set.
    ///
    /// Set semantics: pairs that are not currently assigned simply do not
    /// match the delete filter, so they are no-ops rather than errors.
    pub async fn detach_courses(&self, student_id: i32, course_ids: &[i32]) -> Result<(), DbErr> {
        if course_ids.is_empty() {
            return Ok(());
        }

        entity::prelude::StudentCourse::delete_many()
            .filter(entity::student_course::Column::StudentId.eq(student_id))
            .filter(entity::student_course::Column::CourseId.is_in(course_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
