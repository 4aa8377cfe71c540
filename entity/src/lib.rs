//! SeaORM entity definitions for the university schema.
//!
//! Contains the database entity models for students, courses, groups, and the
//! student-course join table. These entities are shared between the application,
//! the migration crate's schema helpers, and the test utilities.

pub mod course;
pub mod group;
pub mod prelude;
pub mod student;
pub mod student_course;
