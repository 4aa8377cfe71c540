use crate::{
    error::AppError,
    model::student::{CreateStudentParams, UpdateStudentParams},
    service::student::StudentService,
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, CourseFactory, GroupFactory, StudentFactory},
};

mod create;
mod get;
mod update;

fn create_params(student_id: i32) -> CreateStudentParams {
    CreateStudentParams {
        student_id,
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        group_id: None,
        courses: None,
    }
}

fn update_params(student_id: i32) -> UpdateStudentParams {
    UpdateStudentParams {
        student_id,
        first_name: None,
        last_name: None,
        group_id: None,
        courses: None,
        add_courses: None,
        delete_courses: None,
    }
}
