use super::*;

/// Tests finding a student by id.
///
/// Expected: Ok(Some(Model)) with the inserted field values
#[tokio::test]
async fn finds_existing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = StudentFactory::new(db)
        .first_name("Ada")
        .last_name("Lovelace")
        .build()
        .await?;

    let found = StudentRepository::new(db)
        .find_by_id(student.student_id)
        .await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.student_id, student.student_id);
    assert_eq!(found.first_name, "Ada");
    assert_eq!(found.last_name, "Lovelace");
    assert_eq!(found.group_id, None);

    Ok(())
}

/// Tests finding a nonexistent student by id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = StudentRepository::new(db).find_by_id(99999).await?;

    assert!(found.is_none());

    Ok(())
}
