//! Group data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, LoaderTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::group::{CreateGroupParams, Group, UpdateGroupParams};

/// Repository providing database operations for group management.
pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    /// Creates a new GroupRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a group entity by id, without loading relations.
    pub async fn find_by_id(&self, group_id: i32) -> Result<Option<entity::group::Model>, DbErr> {
        entity::prelude::Group::find_by_id(group_id)
            .one(self.db)
            .await
    }

    /// Finds a group with its member students loaded, ordered by student id.
    ///
    /// # Returns
    /// - `Ok(Some(Group))` - Group with students as a domain model
    /// - `Ok(None)` - No group with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_students(&self, group_id: i32) -> Result<Option<Group>, DbErr> {
        let Some(group) = self.find_by_id(group_id).await? else {
            return Ok(None);
        };

        let students = group
            .find_related(entity::prelude::Student)
            .order_by_asc(entity::student::Column::StudentId)
            .all(self.db)
            .await?;

        Ok(Some(Group::from_entity(group, students)))
    }

    /// Gets all groups ordered by id, with member students batch-loaded.
    pub async fn get_all(&self) -> Result<Vec<Group>, DbErr> {
        let groups = entity::prelude::Group::find()
            .order_by_asc(entity::group::Column::GroupId)
            .all(self.db)
            .await?;

        let mut students = groups.load_many(entity::prelude::Student, self.db).await?;
        for list in &mut students {
            list.sort_by_key(|student| student.student_id);
        }

        Ok(groups
            .into_iter()
            .zip(students)
            .map(|(group, students)| Group::from_entity(group, students))
            .collect())
    }

    /// Gets the maximum group id, or 0 when the table is empty.
    pub async fn get_max_id(&self) -> Result<i32, DbErr> {
        let max: Option<Option<i32>> = entity::prelude::Group::find()
            .select_only()
            .column_as(entity::group::Column::GroupId.max(), "max_id")
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(max.flatten().unwrap_or(0))
    }

    /// Checks whether a group with the given id exists.
    pub async fn exists(&self, group_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Group::find()
            .filter(entity::group::Column::GroupId.eq(group_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts all groups. Used by the seeder to detect an empty database.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Group::find().count(self.db).await
    }

    /// Inserts a new group row from creation parameters.
    pub async fn insert(&self, params: &CreateGroupParams) -> Result<entity::group::Model, DbErr> {
        entity::group::ActiveModel {
            group_id: ActiveValue::Set(params.group_id),
            name: ActiveValue::Set(params.name.clone()),
        }
        .insert(self.db)
        .await
    }

    /// Applies a partial update to an existing group row.
    ///
    /// Only the fields present in `params` are written; when no field is
    /// provided the row is returned untouched and no statement is issued.
    pub async fn update(
        &self,
        group: entity::group::Model,
        params: &UpdateGroupParams,
    ) -> Result<entity::group::Model, DbErr> {
        let mut active: entity::group::ActiveModel = group.clone().into();
        let mut dirty = false;

        if let Some(name) = &params.name {
            active.name = ActiveValue::Set(name.clone());
            dirty = true;
        }

        if !dirty {
            return Ok(group);
        }

        active.update(self.db).await
    }

    /// Deletes a group row. Member students keep their rows; the database
    /// nulls their `group_id` on delete.
    pub async fn delete(&self, group: entity::group::Model) -> Result<(), DbErr> {
        group.delete(self.db).await?;
        Ok(())
    }
}
