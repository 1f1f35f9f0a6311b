use super::*;

/// Tests listing reservations of one student.
///
/// Expected: Ok with only that student's reservations, ordered by ID
#[tokio::test]
async fn filters_by_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_reservation(db, 1, 10).await?;
    factory::create_reservation(db, 2, 10).await?;
    let third = factory::create_reservation(db, 1, 11).await?;

    let repo = ReservationRepository::new(db);
    let reservations = repo.find_by_student_id(1).await?;

    let ids: Vec<i32> = reservations.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, third.id]);

    Ok(())
}

/// Tests listing reservations of one instructor.
///
/// Expected: Ok with only that instructor's reservations
#[tokio::test]
async fn filters_by_instructor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_reservation(db, 1, 10).await?;
    let second = factory::create_reservation(db, 2, 11).await?;

    let repo = ReservationRepository::new(db);
    let reservations = repo.find_by_instructor_id(11).await?;

    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].id, second.id);
    assert_eq!(reservations[0].student_id, 2);

    Ok(())
}

/// Tests listing reservations for IDs with no bookings, and listing everything.
///
/// Expected: empty list for unknown owners, all rows for find_all
#[tokio::test]
async fn unknown_owner_has_no_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_reservation(db, 1, 10).await?;
    factory::create_reservation(db, 2, 11).await?;

    let repo = ReservationRepository::new(db);
    assert!(repo.find_by_student_id(99).await?.is_empty());
    assert!(repo.find_by_instructor_id(99).await?.is_empty());
    assert_eq!(repo.find_all().await?.len(), 2);

    Ok(())
}
