use super::*;

/// Tests changing the time of a reservation.
///
/// Verifies that only the time changes.
///
/// Expected: Ok(Some) with new time and other fields intact
#[tokio::test]
async fn changes_time_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_reservation(db, 1, 2).await?;

    let repo = ReservationRepository::new(db);
    let updated = repo
        .update_field(created.id, ReservationChange::Time(time(15, 30)))
        .await?
        .unwrap();

    assert_eq!(updated.time, time(15, 30));
    assert_eq!(updated.date, created.reservation_date);
    assert_eq!(updated.place, created.reservation_place);
    assert_eq!(updated.student_id, 1);
    assert_eq!(updated.instructor_id, 2);

    Ok(())
}

/// Tests each remaining single-field change.
///
/// Expected: every change persisted
#[tokio::test]
async fn applies_each_change() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_reservation(db, 1, 2).await?;

    let repo = ReservationRepository::new(db);
    repo.update_field(created.id, ReservationChange::Date(date(2031, 1, 2)))
        .await?;
    repo.update_field(created.id, ReservationChange::Instructor(8))
        .await?;
    repo.update_field(created.id, ReservationChange::Student(9))
        .await?;
    repo.update_field(created.id, ReservationChange::Place("Ulica Polna".to_string()))
        .await?;

    let stored = entity::prelude::Reservation::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.reservation_date, date(2031, 1, 2));
    assert_eq!(stored.instructor_id, 8);
    assert_eq!(stored.student_id, 9);
    assert_eq!(stored.reservation_place, "Ulica Polna");
    assert_eq!(stored.reservation_time, created.reservation_time);

    Ok(())
}

/// Tests changing a reservation that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    let updated = repo
        .update_field(5, ReservationChange::Student(1))
        .await?;

    assert!(updated.is_none());

    Ok(())
}
