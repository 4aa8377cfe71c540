use super::*;

/// Tests creating a student and reading it back.
///
/// Expected: Ok(()), then get() returns the student with its course attached
#[tokio::test]
async fn creates_student_with_courses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = GroupFactory::new(db).build().await?;
    let course = CourseFactory::new(db).build().await?;

    let service = StudentService::new(db);
    service
        .create(CreateStudentParams {
            student_id: 1,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            group_id: Some(group.group_id),
            courses: Some(vec![course.course_id]),
        })
        .await?;

    let student = service.get(1).await?;
    assert_eq!(student.first_name, "Jane");
    assert_eq!(student.last_name, "Doe");
    assert_eq!(student.group_id, Some(group.group_id));
    assert_eq!(student.courses.len(), 1);
    assert_eq!(student.courses[0].course_id, course.course_id);

    Ok(())
}

/// Tests creating a student whose id is already taken.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_existing_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = StudentFactory::new(db).build().await?;

    let result = StudentService::new(db)
        .create(create_params(student.student_id))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests creating a student with an unknown course id.
///
/// Expected: Err(AppError::NotFound), no student row written
#[tokio::test]
async fn rejects_unknown_course() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(db);
    let result = service
        .create(CreateStudentParams {
            courses: Some(vec![99999]),
            ..create_params(1)
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(matches!(
        service.get(1).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests creating a student with an out-of-bounds name.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn rejects_invalid_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentService::new(db)
        .create(CreateStudentParams {
            first_name: String::new(),
            ..create_params(1)
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}
