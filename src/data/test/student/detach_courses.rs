use super::*;

/// Tests detaching an assigned course.
///
/// Expected: Ok(()), only the remaining course left on the student
#[tokio::test]
async fn detaches_assigned_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = CourseFactory::new(db).build().await?;
    let second = CourseFactory::new(db).build().await?;
    let student = StudentFactory::new(db)
        .course(first.course_id)
        .course(second.course_id)
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    repo.detach_courses(student.student_id, &[first.course_id])
        .await?;

    let found = repo.find_with_relations(student.student_id).await?.unwrap();
    assert_eq!(found.courses.len(), 1);
    assert_eq!(found.courses[0].course_id, second.course_id);

    Ok(())
}

/// Tests detaching a course the student is not enrolled in.
///
/// Expected: Ok(()), existing enrollment untouched
#[tokio::test]
async fn ignores_unassigned_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let enrolled = CourseFactory::new(db).build().await?;
    let other = CourseFactory::new(db).build().await?;
    let student = StudentFactory::new(db)
        .course(enrolled.course_id)
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    repo.detach_courses(student.student_id, &[other.course_id])
        .await?;

    let found = repo.find_with_relations(student.student_id).await?.unwrap();
    assert_eq!(found.courses.len(), 1);
    assert_eq!(found.courses[0].course_id, enrolled.course_id);

    Ok(())
}

/// Tests that detaching only affects the targeted student.
///
/// Expected: Ok(()), the second student keeps the shared course
#[tokio::test]
async fn scopes_removal_to_one_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = CourseFactory::new(db).build().await?;
    let first = StudentFactory::new(db).course(course.course_id).build().await?;
    let second = StudentFactory::new(db).course(course.course_id).build().await?;

    let repo = StudentRepository::new(db);
    repo.detach_courses(first.student_id, &[course.course_id])
        .await?;

    assert!(repo
        .find_with_relations(first.student_id)
        .await?
        .unwrap()
        .courses
        .is_empty());
    assert_eq!(
        repo.find_with_relations(second.student_id)
            .await?
            .unwrap()
            .courses
            .len(),
        1
    );

    Ok(())
}
