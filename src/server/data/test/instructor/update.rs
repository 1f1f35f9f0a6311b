use super::*;

/// Tests replacing every field of an instructor.
///
/// Expected: Ok(Some) with new values persisted
#[tokio::test]
async fn overwrites_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Instructor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_instructor(db).await?;

    let repo = InstructorRepository::new(db);
    let updated = repo
        .update(
            created.id,
            InstructorParam {
                name: "Marek".to_string(),
                name_of_school: None,
                ..param("marek@school.pl")
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Marek");
    assert_eq!(updated.email, "marek@school.pl");

    let db_instructor = entity::prelude::Instructor::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_instructor.name, "Marek");
    assert!(db_instructor.name_of_school.is_none());

    Ok(())
}

/// Tests updating an instructor that does not exist.
///
/// Expected: Ok(None) and no row written
#[tokio::test]
async fn returns_none_for_missing_instructor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Instructor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InstructorRepository::new(db);
    let updated = repo.update(7, param("ghost@school.pl")).await?;

    assert!(updated.is_none());
    assert_eq!(entity::prelude::Instructor::find().count(db).await?, 0);

    Ok(())
}
