//! Course data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, LoaderTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::course::{Course, CreateCourseParams, UpdateCourseParams};

/// Repository providing database operations for course management.
pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    /// Creates a new CourseRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a course entity by id, without loading relations.
    pub async fn find_by_id(&self, course_id: i32) -> Result<Option<entity::course::Model>, DbErr> {
        entity::prelude::Course::find_by_id(course_id)
            .one(self.db)
            .await
    }

    /// Finds a course with its enrolled students loaded, ordered by student id.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - Course with students as a domain model
    /// - `Ok(None)` - No course with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_students(&self, course_id: i32) -> Result<Option<Course>, DbErr> {
        let Some(course) = self.find_by_id(course_id).await? else {
            return Ok(None);
        };

        let students = course
            .find_related(entity::prelude::Student)
            .order_by_asc(entity::student::Column::StudentId)
            .all(self.db)
            .await?;

        Ok(Some(Course::from_entity(course, students)))
    }

    /// Gets all courses ordered by id, with enrolled students batch-loaded.
    pub async fn get_all(&self) -> Result<Vec<Course>, DbErr> {
        let courses = entity::prelude::Course::find()
            .order_by_asc(entity::course::Column::CourseId)
            .all(self.db)
            .await?;

        let mut students = courses
            .load_many_to_many(
                entity::prelude::Student,
                entity::prelude::StudentCourse,
                self.db,
            )
            .await?;
        for list in &mut students {
            list.sort_by_key(|student| student.student_id);
        }

        Ok(courses
            .into_iter()
            .zip(students)
            .map(|(course, students)| Course::from_entity(course, students))
            .collect())
    }

    /// Finds courses by a list of ids, preserving the request order.
    ///
    /// The caller decides what a missing id means; this method simply returns
    /// the subset that exists.
    pub async fn find_by_ids(&self, course_ids: &[i32]) -> Result<Vec<entity::course::Model>, DbErr> {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let found = entity::prelude::Course::find()
            .filter(entity::course::Column::CourseId.is_in(course_ids.iter().copied()))
            .all(self.db)
            .await?;

        let mut ordered = Vec::with_capacity(found.len());
        for &id in course_ids {
            if let Some(course) = found.iter().find(|course| course.course_id == id) {
                ordered.push(course.clone());
            }
        }

        Ok(ordered)
    }

    /// Gets the maximum course id, or 0 when the table is empty.
    pub async fn get_max_id(&self) -> Result<i32, DbErr> {
        let max: Option<Option<i32>> = entity::prelude::Course::find()
            .select_only()
            .column_as(entity::course::Column::CourseId.max(), "max_id")
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(max.flatten().unwrap_or(0))
    }

    /// Checks whether a course with the given id exists.
    pub async fn exists(&self, course_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Course::find()
            .filter(entity::course::Column::CourseId.eq(course_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new course row from creation parameters.
    pub async fn insert(&self, params: &CreateCourseParams) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            course_id: ActiveValue::Set(params.course_id),
            name: ActiveValue::Set(params.name.clone()),
            description: ActiveValue::Set(params.description.clone()),
        }
        .insert(self.db)
        .await
    }

    /// Applies a partial update to an existing course row.
    ///
    /// Only the fields present in `params` are written; when no field is
    /// provided the row is returned untouched and no statement is issued.
    pub async fn update(
        &self,
        course: entity::course::Model,
        params: &UpdateCourseParams,
    ) -> Result<entity::course::Model, DbErr> {
        let mut active: entity::course::ActiveModel = course.clone().into();
        let mut dirty = false;

        if let Some(name) = &params.name {
            active.name = ActiveValue::Set(name.clone());
            dirty = true;
        }
        if let Some(description) = &params.description {
            active.description = ActiveValue::Set(description.clone());
            dirty = true;
        }

        if !dirty {
            return Ok(course);
        }

        active.update(self.db).await
    }

    /// Deletes a course row. Join-table rows cascade at the database level.
    pub async fn delete(&self, course: entity::course::Model) -> Result<(), DbErr> {
        course.delete(self.db).await?;
        Ok(())
    }
}
