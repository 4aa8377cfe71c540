use sea_orm_migration::prelude::*;

use super::m20260301_000001_create_group_table::Group;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Student::StudentId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Student::FirstName).string_len(50).not_null())
                    .col(ColumnDef::new(Student::LastName).string_len(50).not_null())
                    .col(ColumnDef::new(Student::GroupId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_group_id")
                            .from(Student::Table, Student::GroupId)
                            .to(Group::Table, Group::GroupId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    #[sea_orm(iden = "students")]
    Table,
    StudentId,
    FirstName,
    LastName,
    GroupId,
}
