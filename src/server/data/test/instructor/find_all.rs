use super::*;

/// Tests listing instructors.
///
/// Expected: Ok with instructors ordered by ID
#[tokio::test]
async fn lists_instructors_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Instructor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_instructor(db).await?;
    let second = factory::instructor::InstructorFactory::new(db)
        .name("Piotr")
        .name_of_school(None)
        .build()
        .await?;

    let repo = InstructorRepository::new(db);
    let instructors = repo.find_all().await?;

    assert_eq!(instructors.len(), 2);
    assert_eq!(instructors[0].id, first.id);
    assert_eq!(instructors[1].id, second.id);
    assert_eq!(instructors[1].name, "Piotr");
    assert!(instructors[1].name_of_school.is_none());

    Ok(())
}
