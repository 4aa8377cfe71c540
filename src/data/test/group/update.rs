use super::*;

/// Tests renaming a group.
///
/// Expected: Ok(Model) with the new name persisted
#[tokio::test]
async fn renames_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = GroupFactory::new(db).name("AB-12").build().await?;

    let repo = GroupRepository::new(db);
    let updated = repo
        .update(
            group.clone(),
            &UpdateGroupParams {
                group_id: group.group_id,
                name: Some("CD-34".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.name, "CD-34");

    let found = repo.find_by_id(group.group_id).await?.unwrap();
    assert_eq!(found.name, "CD-34");

    Ok(())
}

/// Tests an update with no fields provided.
///
/// Expected: Ok(Model) identical to the input
#[tokio::test]
async fn leaves_row_untouched_without_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = GroupFactory::new(db).build().await?;

    let updated = GroupRepository::new(db)
        .update(
            group.clone(),
            &UpdateGroupParams {
                group_id: group.group_id,
                name: None,
            },
        )
        .await?;

    assert_eq!(updated, group);

    Ok(())
}
