use super::*;

/// Tests deleting a student row.
///
/// Expected: Ok(()), row no longer findable
#[tokio::test]
async fn deletes_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = StudentFactory::new(db).build().await?;
    let repo = StudentRepository::new(db);

    repo.delete(student.clone()).await?;

    assert!(repo.find_by_id(student.student_id).await?.is_none());

    Ok(())
}

/// Tests that deleting one student leaves others in place.
///
/// Expected: Ok(()), the second student still findable
#[tokio::test]
async fn leaves_other_students_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = StudentFactory::new(db).build().await?;
    let second = StudentFactory::new(db).build().await?;

    let repo = StudentRepository::new(db);
    repo.delete(first).await?;

    assert!(repo.find_by_id(second.student_id).await?.is_some());

    Ok(())
}
