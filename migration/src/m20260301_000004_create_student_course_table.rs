use sea_orm_migration::prelude::*;

use super::{
    m20260301_000002_create_course_table::Course, m20260301_000003_create_student_table::Student,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentCourse::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(StudentCourse::StudentId).integer().not_null())
                    .col(ColumnDef::new(StudentCourse::CourseId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(StudentCourse::StudentId)
                            .col(StudentCourse::CourseId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_course_student_id")
                            .from(StudentCourse::Table, StudentCourse::StudentId)
                            .to(Student::Table, Student::StudentId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_course_course_id")
                            .from(StudentCourse::Table, StudentCourse::CourseId)
                            .to(Course::Table, Course::CourseId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentCourse::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudentCourse {
    #[sea_orm(iden = "students_courses")]
    Table,
    StudentId,
    CourseId,
}
