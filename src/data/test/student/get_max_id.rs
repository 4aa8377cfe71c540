use super::*;

/// Tests the maximum id over existing students.
///
/// Expected: Ok(max) regardless of insertion order
#[tokio::test]
async fn returns_highest_student_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    StudentFactory::new(db).student_id(42).build().await?;
    StudentFactory::new(db).student_id(7).build().await?;

    let max = StudentRepository::new(db).get_max_id().await?;

    assert_eq!(max, 42);

    Ok(())
}

/// Tests the maximum id on an empty table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let max = StudentRepository::new(db).get_max_id().await?;

    assert_eq!(max, 0);

    Ok(())
}
