use super::*;

/// Tests checking an email that belongs to an instructor.
///
/// Expected: Ok(true)
#[tokio::test]
async fn reports_taken_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Instructor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;

    let repo = InstructorRepository::new(db);
    assert!(repo.email_taken(&instructor.email, None).await?);

    Ok(())
}

/// Tests checking an unused email.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_free_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Instructor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_instructor(db).await?;

    let repo = InstructorRepository::new(db);
    assert!(!repo.email_taken("nobody@school.pl", None).await?);

    Ok(())
}

/// Tests checking an instructor's own email while excluding that instructor.
///
/// Verifies that an update may keep the current email, while another
/// instructor's email still counts as taken.
///
/// Expected: Ok(false) for own email, Ok(true) for the other's
#[tokio::test]
async fn ignores_excluded_instructor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Instructor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_instructor(db).await?;
    let second = factory::create_instructor(db).await?;

    let repo = InstructorRepository::new(db);
    assert!(!repo.email_taken(&first.email, Some(first.id)).await?);
    assert!(repo.email_taken(&second.email, Some(first.id)).await?);

    Ok(())
}
