use super::*;

/// Tests creating a student.
///
/// Verifies that the repository assigns an ID and stores every field as given.
///
/// Expected: Ok with student created
#[tokio::test]
async fn creates_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo
        .create(StudentParam {
            name_of_school: Some("AutoSzkola ABC".to_string()),
            ..param("Al", "al@bee.com")
        })
        .await?;

    assert!(student.id > 0);
    assert_eq!(student.name, "Al");
    assert_eq!(student.name_of_school.as_deref(), Some("AutoSzkola ABC"));

    let db_student = entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_student.email, "al@bee.com");
    assert_eq!(db_student.password, "password123");

    Ok(())
}

/// Tests creating two students with the same email.
///
/// Verifies that student emails are not unique.
///
/// Expected: Ok with two distinct rows
#[tokio::test]
async fn allows_duplicate_student_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let first = repo.create(param("Jan", "shared@example.com")).await?;
    let second = repo.create(param("Ola", "shared@example.com")).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(entity::prelude::Student::find().count(db).await?, 2);

    Ok(())
}
