use super::*;

/// Tests replacing every field of a student.
///
/// Expected: Ok(Some) with new values persisted and ID unchanged
#[tokio::test]
async fn overwrites_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::student::StudentFactory::new(db)
        .name_of_school(Some("Old School".to_string()))
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let updated = repo
        .update(created.id, param("Zofia", "zofia@example.com"))
        .await?
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Zofia");
    assert_eq!(updated.name_of_school, None);

    let db_student = entity::prelude::Student::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_student.email, "zofia@example.com");
    assert!(db_student.name_of_school.is_none());

    Ok(())
}

/// Tests updating a student that does not exist.
///
/// Verifies that no row is written.
///
/// Expected: Ok(None) and table still empty
#[tokio::test]
async fn returns_none_and_writes_nothing_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let updated = repo.update(42, param("Zofia", "zofia@example.com")).await?;

    assert!(updated.is_none());
    assert_eq!(entity::prelude::Student::find().count(db).await?, 0);

    Ok(())
}
