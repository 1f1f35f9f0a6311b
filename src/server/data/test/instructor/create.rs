use super::*;

/// Tests creating an instructor.
///
/// Expected: Ok with instructor created and readable by ID
#[tokio::test]
async fn creates_instructor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Instructor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InstructorRepository::new(db);
    let instructor = repo.create(param("anna@school.pl")).await?;

    let found = repo.find_by_id(instructor.id).await?.unwrap();
    assert_eq!(found, instructor);
    assert_eq!(found.name_of_school.as_deref(), Some("AutoSzkola ABC"));

    Ok(())
}

/// Tests inserting an instructor with an email already in use.
///
/// Verifies that the unique index rejects the row even without a prior check.
///
/// Expected: Err and only the first row stored
#[tokio::test]
async fn rejects_duplicate_email_at_database_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Instructor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::instructor::InstructorFactory::new(db)
        .email("taken@school.pl")
        .build()
        .await?;

    let repo = InstructorRepository::new(db);
    let result = repo.create(param("taken@school.pl")).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Instructor::find().count(db).await?, 1);

    Ok(())
}
