//! Group business logic.

use sea_orm::DatabaseConnection;

use crate::{
    data::group::GroupRepository,
    error::AppError,
    model::group::{CreateGroupParams, Group, UpdateGroupParams},
    util::validate,
};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn not_found(group_id: i32) -> AppError {
        AppError::NotFound(format!("Group with id '{}' not found", group_id))
    }

    /// Gets a group with member students loaded, or fails with 404.
    pub async fn get(&self, group_id: i32) -> Result<Group, AppError> {
        GroupRepository::new(self.db)
            .find_with_students(group_id)
            .await?
            .ok_or_else(|| Self::not_found(group_id))
    }

    /// Lists all groups ordered by id, with member students loaded.
    pub async fn list(&self) -> Result<Vec<Group>, AppError> {
        Ok(GroupRepository::new(self.db).get_all().await?)
    }

    /// Creates a group. The id must not exist yet (400 Conflict otherwise);
    /// the name must match the `AA-11` pattern.
    pub async fn create(&self, params: CreateGroupParams) -> Result<(), AppError> {
        validate::group_name(&params.name)?;

        let repo = GroupRepository::new(self.db);
        if repo.exists(params.group_id).await? {
            return Err(AppError::Conflict(format!(
                "Group with id '{}' already exists",
                params.group_id
            )));
        }

        repo.insert(&params).await?;
        Ok(())
    }

    /// Applies a partial update to a group, or fails with 404. A provided
    /// name must match the `AA-11` pattern.
    pub async fn update(&self, params: UpdateGroupParams) -> Result<(), AppError> {
        if let Some(name) = &params.name {
            validate::group_name(name)?;
        }

        let repo = GroupRepository::new(self.db);
        let group = repo
            .find_by_id(params.group_id)
            .await?
            .ok_or_else(|| Self::not_found(params.group_id))?;

        repo.update(group, &params).await?;
        Ok(())
    }

    /// Deletes a group, or fails with 404. Member students are kept and
    /// detached by the database's on-delete rule.
    pub async fn delete(&self, group_id: i32) -> Result<(), AppError> {
        let repo = GroupRepository::new(self.db);
        let group = repo
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| Self::not_found(group_id))?;

        repo.delete(group).await?;
        Ok(())
    }
}
