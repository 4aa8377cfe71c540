use crate::{
    data::group::GroupRepository,
    model::group::{CreateGroupParams, UpdateGroupParams},
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{GroupFactory, StudentFactory},
};

mod update;
