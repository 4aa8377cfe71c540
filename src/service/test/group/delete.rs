use super::*;

/// Tests deleting a group.
///
/// Expected: Ok(()), subsequent get() fails with NotFound
#[tokio::test]
async fn deletes_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = GroupFactory::new(db).build().await?;

    let service = GroupService::new(db);
    service.delete(group.group_id).await?;

    assert!(matches!(
        service.get(group.group_id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that deleting a group leaves member students in place.
///
/// Expected: Ok(()), the student row survives
#[tokio::test]
async fn keeps_member_students() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = GroupFactory::new(db).build().await?;
    let student = StudentFactory::new(db).group_id(group.group_id).build().await?;

    GroupService::new(db).delete(group.group_id).await?;

    let found = crate::data::student::StudentRepository::new(db)
        .find_by_id(student.student_id)
        .await
        .map_err(AppError::from)?;
    assert!(found.is_some());

    Ok(())
}

/// Tests deleting a nonexistent group.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GroupService::new(db).delete(99999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
