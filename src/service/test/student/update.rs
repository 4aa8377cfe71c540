use super::*;

/// Tests a field-only update.
///
/// Expected: Ok(()), provided fields changed, course set untouched
#[tokio::test]
async fn updates_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_group, course, student) = factory::helpers::create_student_with_relations(db).await?;

    let service = StudentService::new(db);
    service
        .update(UpdateStudentParams {
            first_name: Some("Renamed".to_string()),
            ..update_params(student.student_id)
        })
        .await?;

    let updated = service.get(student.student_id).await?;
    assert_eq!(updated.first_name, "Renamed");
    assert_eq!(updated.last_name, student.last_name);
    assert_eq!(updated.courses.len(), 1);
    assert_eq!(updated.courses[0].course_id, course.course_id);

    Ok(())
}

/// Tests updating a nonexistent student.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentService::new(db).update(update_params(99999)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that a non-empty bare course list is rejected even when other
/// fields are present.
///
/// Expected: Err(AppError::Validation), no field written
#[tokio::test]
async fn rejects_direct_course_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = CourseFactory::new(db).build().await?;
    let student = StudentFactory::new(db).first_name("Before").build().await?;

    let service = StudentService::new(db);
    let result = service
        .update(UpdateStudentParams {
            first_name: Some("After".to_string()),
            courses: Some(vec![course.course_id]),
            ..update_params(student.student_id)
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    let unchanged = service.get(student.student_id).await?;
    assert_eq!(unchanged.first_name, "Before");

    Ok(())
}

/// Tests that an empty bare course list is tolerated.
///
/// Expected: Ok(()), other fields applied
#[tokio::test]
async fn ignores_empty_course_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = StudentFactory::new(db).build().await?;

    let service = StudentService::new(db);
    service
        .update(UpdateStudentParams {
            first_name: Some("After".to_string()),
            courses: Some(Vec::new()),
            ..update_params(student.student_id)
        })
        .await?;

    assert_eq!(service.get(student.student_id).await?.first_name, "After");

    Ok(())
}

/// Tests that adding courses is an idempotent union.
///
/// Expected: Ok(()) both times, each course present exactly once
#[tokio::test]
async fn add_courses_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = CourseFactory::new(db).build().await?;
    let second = CourseFactory::new(db).build().await?;
    let student = StudentFactory::new(db).course(first.course_id).build().await?;

    let service = StudentService::new(db);
    let params = UpdateStudentParams {
        add_courses: Some(vec![first.course_id, second.course_id]),
        ..update_params(student.student_id)
    };

    service.update(params.clone()).await?;
    service.update(params).await?;

    let updated = service.get(student.student_id).await?;
    assert_eq!(updated.courses.len(), 2);

    Ok(())
}

/// Tests removing an assigned and an unassigned course in one request.
///
/// Expected: Ok(()), the assigned course removed, the unassigned one a no-op
#[tokio::test]
async fn delete_courses_has_set_semantics() -> Result<(), AppError> {
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

    let service = StudentService::new(db);
    service
        .update(UpdateStudentParams {
            delete_courses: Some(vec![enrolled.course_id, other.course_id]),
            ..update_params(student.student_id)
        })
        .await?;

    let updated = service.get(student.student_id).await?;
    assert!(updated.courses.is_empty());

    Ok(())
}

/// Tests that naming a nonexistent course in delete_courses is an error.
///
/// Expected: Err(AppError::NotFound), enrollment untouched
#[tokio::test]
async fn rejects_unknown_course_in_delete_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = CourseFactory::new(db).build().await?;
    let student = StudentFactory::new(db).course(course.course_id).build().await?;

    let service = StudentService::new(db);
    let result = service
        .update(UpdateStudentParams {
            delete_courses: Some(vec![99999]),
            ..update_params(student.student_id)
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(service.get(student.student_id).await?.courses.len(), 1);

    Ok(())
}

/// Tests adding and removing courses in the same request.
///
/// Expected: Ok(()), removal applies after the union
#[tokio::test]
async fn applies_add_and_delete_together() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let old = CourseFactory::new(db).build().await?;
    let new = CourseFactory::new(db).build().await?;
    let student = StudentFactory::new(db).course(old.course_id).build().await?;

    let service = StudentService::new(db);
    service
        .update(UpdateStudentParams {
            add_courses: Some(vec![new.course_id]),
            delete_courses: Some(vec![old.course_id]),
            ..update_params(student.student_id)
        })
        .await?;

    let updated = service.get(student.student_id).await?;
    assert_eq!(updated.courses.len(), 1);
    assert_eq!(updated.courses[0].course_id, new.course_id);

    Ok(())
}
