//! Group domain models and parameters.

use crate::{
    dto::group::{CreateGroupDto, FullGroupDto, ShortGroupDto, UpdateGroupDto},
    model::student::StudentRef,
};

/// Group with its member students loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub group_id: i32,
    pub name: String,
    /// Member students ordered by student id.
    pub students: Vec<StudentRef>,
}

impl Group {
    /// Builds a group domain model from an entity and its loaded students.
    pub fn from_entity(group: entity::group::Model, students: Vec<entity::student::Model>) -> Self {
        Self {
            group_id: group.group_id,
            name: group.name,
            students: students.into_iter().map(StudentRef::from_entity).collect(),
        }
    }

    pub fn into_short_dto(self) -> ShortGroupDto {
        ShortGroupDto {
            group_id: self.group_id,
            name: self.name,
        }
    }

    pub fn into_full_dto(self) -> FullGroupDto {
        FullGroupDto {
            group_id: self.group_id,
            name: self.name,
            students: self
                .students
                .into_iter()
                .map(StudentRef::into_dto)
                .collect(),
        }
    }
}

/// Minimal group reference nested inside the full student projection.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRef {
    pub group_id: i32,
    pub name: String,
}

impl GroupRef {
    pub fn from_entity(group: entity::group::Model) -> Self {
        Self {
            group_id: group.group_id,
            name: group.name,
        }
    }
}

/// Parameters for creating a group.
#[derive(Debug, Clone)]
pub struct CreateGroupParams {
    /// Client-assigned id, taken from the request path.
    pub group_id: i32,
    /// Group name; must match the `AA-11` pattern.
    pub name: String,
}

impl CreateGroupParams {
    /// Merges the path id over the request body.
    pub fn from_dto(group_id: i32, dto: CreateGroupDto) -> Self {
        Self {
            group_id,
            name: dto.name,
        }
    }
}

/// Parameters for a partial group update; `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateGroupParams {
    pub group_id: i32,
    pub name: Option<String>,
}

impl UpdateGroupParams {
    /// Merges the path id over the request body.
    pub fn from_dto(group_id: i32, dto: UpdateGroupDto) -> Self {
        Self {
            group_id,
            name: dto.name,
        }
    }
}
