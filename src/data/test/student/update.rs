use super::*;

fn unchanged_params(student_id: i32) -> UpdateStudentParams {
    UpdateStudentParams {
        student_id,
        first_name: None,
        last_name: None,
        group_id: None,
        courses: None,
        add_courses: None,
        delete_courses: None,
    }
}

/// Tests updating a subset of student fields.
///
/// Expected: Ok(Model) with provided fields written and the rest untouched
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = StudentFactory::new(db)
        .first_name("Old")
        .last_name("Name")
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let updated = repo
        .update(
            student.clone(),
            &UpdateStudentParams {
                first_name: Some("New".to_string()),
                ..unchanged_params(student.student_id)
            },
        )
        .await?;

    assert_eq!(updated.first_name, "New");
    assert_eq!(updated.last_name, "Name");
    assert_eq!(updated.group_id, None);

    Ok(())
}

/// Tests assigning a group through update.
///
/// Expected: Ok(Model) with the new group id persisted
#[tokio::test]
async fn assigns_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = GroupFactory::new(db).build().await?;
    let student = StudentFactory::new(db).build().await?;

    let repo = StudentRepository::new(db);
    let updated = repo
        .update(
            student.clone(),
            &UpdateStudentParams {
                group_id: Some(group.group_id),
                ..unchanged_params(student.student_id)
            },
        )
        .await?;

    assert_eq!(updated.group_id, Some(group.group_id));

    let found = repo.find_by_id(student.student_id).await?.unwrap();
    assert_eq!(found.group_id, Some(group.group_id));

    Ok(())
}

/// Tests an update with no fields provided.
///
/// Expected: Ok(Model) identical to the input, no statement issued
#[tokio::test]
async fn leaves_row_untouched_without_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = StudentFactory::new(db).build().await?;

    let updated = StudentRepository::new(db)
        .update(student.clone(), &unchanged_params(student.student_id))
        .await?;

    assert_eq!(updated, student);

    Ok(())
}
