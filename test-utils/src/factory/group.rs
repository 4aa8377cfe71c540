//! Group factory for creating test group entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test groups with customizable fields.
///
/// Provides a builder pattern for creating group entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::GroupFactory;
///
/// let group = GroupFactory::new(&db)
///     .group_id(7)
///     .name("AA-11")
///     .build()
///     .await?;
/// ```
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    group_id: i32,
    name: String,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory with default values.
    ///
    /// Defaults:
    /// - group_id: auto-incremented counter value
    /// - name: `"GR-{id:02}"` truncated to two digits
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id() as i32;
        Self {
            db,
            group_id: id,
            name: format!("GR-{:02}", id % 100),
        }
    }

    /// Sets the group id.
    pub fn group_id(mut self, group_id: i32) -> Self {
        self.group_id = group_id;
        self
    }

    /// Sets the group name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the group entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::group::Model)` - Created group entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::group::Model, DbErr> {
        entity::group::ActiveModel {
            group_id: ActiveValue::Set(self.group_id),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}
