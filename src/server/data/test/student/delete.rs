use super::*;

/// Tests deleting a student.
///
/// Expected: Ok(true) and row removed
#[tokio::test]
async fn deletes_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let deleted = repo.delete(student.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting the same student twice.
///
/// Expected: second delete returns Ok(false)
#[tokio::test]
async fn second_delete_reports_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    assert!(repo.delete(student.id).await?);
    assert!(!repo.delete(student.id).await?);

    Ok(())
}
