use super::*;

/// Tests finding a student with group and courses loaded.
///
/// Expected: Ok(Some(Student)) with the group and one course populated
#[tokio::test]
async fn loads_group_and_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (group, course, student) = factory::helpers::create_student_with_relations(db).await?;

    let found = StudentRepository::new(db)
        .find_with_relations(student.student_id)
        .await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.student_id, student.student_id);
    assert_eq!(found.group_id, Some(group.group_id));
    assert_eq!(found.group.as_ref().unwrap().name, group.name);
    assert_eq!(found.courses.len(), 1);
    assert_eq!(found.courses[0].course_id, course.course_id);
    assert_eq!(found.courses[0].name, course.name);

    Ok(())
}

/// Tests loading a student without a group or courses.
///
/// Expected: Ok(Some(Student)) with group None and an empty course list
#[tokio::test]
async fn loads_student_without_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = StudentFactory::new(db).build().await?;

    let found = StudentRepository::new(db)
        .find_with_relations(student.student_id)
        .await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert!(found.group.is_none());
    assert!(found.courses.is_empty());

    Ok(())
}

/// Tests that a student's courses come back ordered by course id.
///
/// Expected: Ok(Some(Student)) with courses sorted ascending regardless of
/// enrollment order
#[tokio::test]
async fn orders_courses_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = CourseFactory::new(db).course_id(10).build().await?;
    let second = CourseFactory::new(db).course_id(20).build().await?;
    let third = CourseFactory::new(db).course_id(30).build().await?;

    let student = StudentFactory::new(db)
        .course(third.course_id)
        .course(first.course_id)
        .course(second.course_id)
        .build()
        .await?;

    let found = StudentRepository::new(db)
        .find_with_relations(student.student_id)
        .await?
        .unwrap();

    let ids: Vec<i32> = found.courses.iter().map(|course| course.course_id).collect();
    assert_eq!(ids, vec![10, 20, 30]);

    Ok(())
}
