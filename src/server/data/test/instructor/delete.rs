use super::*;

/// Tests deleting an instructor who still has reservations.
///
/// Verifies that reservations are not cascaded.
///
/// Expected: Ok(true), reservation row untouched
#[tokio::test]
async fn deletes_instructor_and_keeps_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, instructor, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = InstructorRepository::new(db);
    assert!(repo.delete(instructor.id).await?);
    assert!(repo.find_by_id(instructor.id).await?.is_none());

    let kept = entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await?;
    assert_eq!(kept.unwrap().instructor_id, instructor.id);

    Ok(())
}

/// Tests deleting an instructor that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_instructor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Instructor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InstructorRepository::new(db);
    assert!(!repo.delete(1).await?);

    Ok(())
}
