use super::*;

/// Tests listing students.
///
/// Verifies that every student is returned in ID order.
///
/// Expected: Ok with students ordered by ID
#[tokio::test]
async fn lists_students_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_student(db).await?;
    let second = factory::create_student(db).await?;
    let third = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let students = repo.find_all().await?;

    let ids: Vec<i32> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests listing students on an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn lists_nothing_when_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let students = repo.find_all().await?;

    assert!(students.is_empty());

    Ok(())
}
