use super::*;

/// Tests listing all courses with enrollments batch-loaded.
///
/// Expected: Ok(Vec<Course>) ordered by course id, each with its students
#[tokio::test]
async fn lists_courses_with_students_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = CourseFactory::new(db).course_id(10).build().await?;
    let second = CourseFactory::new(db).course_id(20).build().await?;
    let student = StudentFactory::new(db).course(second.course_id).build().await?;

    let courses = CourseRepository::new(db).get_all().await?;

    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].course_id, first.course_id);
    assert_eq!(courses[1].course_id, second.course_id);

    assert!(courses[0].students.is_empty());
    assert_eq!(courses[1].students.len(), 1);
    assert_eq!(courses[1].students[0].student_id, student.student_id);

    Ok(())
}

/// Tests listing when no courses exist.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_list_without_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let courses = CourseRepository::new(db).get_all().await?;

    assert!(courses.is_empty());

    Ok(())
}
