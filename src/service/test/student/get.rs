use super::*;
use serde_json::json;

/// Tests fetching a nonexistent student.
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

    let result = StudentService::new(db).get(99999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests listing all students ordered by id.
///
/// Expected: Ok(Vec<Student>) in ascending id order
#[tokio::test]
async fn lists_students_in_id_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    StudentFactory::new(db).student_id(30).build().await?;
    StudentFactory::new(db).student_id(10).build().await?;
    StudentFactory::new(db).student_id(20).build().await?;

    let students = StudentService::new(db).list().await?;

    let ids: Vec<i32> = students
        .iter()
        .map(|student| student.student_id)
        .collect();
    assert_eq!(ids, vec![10, 20, 30]);

    Ok(())
}

/// Tests the short projection's flattened relationship fields.
///
/// Expected: group becomes its name, courses a comma-joined name string
#[tokio::test]
async fn short_projection_flattens_relations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = GroupFactory::new(db).name("AB-12").build().await?;
    let math = CourseFactory::new(db).course_id(1).name("Math").build().await?;
    let physics = CourseFactory::new(db)
        .course_id(2)
        .name("Physics")
        .build()
        .await?;
    StudentFactory::new(db)
        .student_id(5)
        .first_name("Jane")
        .last_name("Doe")
        .group_id(group.group_id)
        .course(physics.course_id)
        .course(math.course_id)
        .build()
        .await?;

    let student = StudentService::new(db).get(5).await?;
    let body = serde_json::to_value(student.into_short_dto()).unwrap();

    assert_eq!(
        body,
        json!({
            "student_id": 5,
            "first_name": "Jane",
            "last_name": "Doe",
            "group_name": "AB-12",
            "course_names": "Math, Physics",
        })
    );

    Ok(())
}

/// Tests the short projection of a student without relations.
///
/// Expected: group_name and course_names serialize as null
#[tokio::test]
async fn short_projection_uses_null_for_missing_relations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = StudentFactory::new(db).build().await?;

    let fetched = StudentService::new(db).get(student.student_id).await?;
    let body = serde_json::to_value(fetched.into_short_dto()).unwrap();

    assert_eq!(body["group_name"], json!(null));
    assert_eq!(body["course_names"], json!(null));

    Ok(())
}

/// Tests the full projection's nested objects.
///
/// Expected: nested group object and course list with ids and names
#[tokio::test]
async fn full_projection_nests_relations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = GroupFactory::new(db).group_id(3).name("AB-12").build().await?;
    let course = CourseFactory::new(db)
        .course_id(7)
        .name("Math")
        .build()
        .await?;
    StudentFactory::new(db)
        .student_id(5)
        .first_name("Jane")
        .last_name("Doe")
        .group_id(group.group_id)
        .course(course.course_id)
        .build()
        .await?;

    let student = StudentService::new(db).get(5).await?;
    let body = serde_json::to_value(student.into_full_dto()).unwrap();

    assert_eq!(
        body,
        json!({
            "student_id": 5,
            "first_name": "Jane",
            "last_name": "Doe",
            "group_id": 3,
            "group": {"group_id": 3, "name": "AB-12"},
            "courses": [{"course_id": 7, "name": "Math"}],
        })
    );

    Ok(())
}
