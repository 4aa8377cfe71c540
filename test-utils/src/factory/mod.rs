//! Entity factories for constructing test fixtures.
//!
//! Each factory provides builder-style defaults for one entity so tests only
//! spell out the fields they actually assert on.

pub mod course;
pub mod group;
pub mod helpers;
pub mod student;

pub use course::CourseFactory;
pub use group::GroupFactory;
pub use student::StudentFactory;
