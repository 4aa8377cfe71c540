//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique test
/// identifiers across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a student together with its group and one enrolled course.
///
/// Convenience method that creates:
/// 1. Group
/// 2. Course
/// 3. Student assigned to the group and enrolled in the course
///
/// All entities are created with default values. Use the individual factories
/// when a test needs to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((group, course, student))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_with_relations(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::group::Model,
        entity::course::Model,
        entity::student::Model,
    ),
    DbErr,
> {
    let group = crate::factory::group::GroupFactory::new(db).build().await?;
    let course = crate::factory::course::CourseFactory::new(db).build().await?;
    let student = crate::factory::student::StudentFactory::new(db)
        .group_id(group.group_id)
        .course(course.course_id)
        .build()
        .await?;

    Ok((group, course, student))
}
