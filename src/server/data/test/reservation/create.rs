use super::*;

/// Tests creating a reservation.
///
/// Expected: Ok with every field stored
#[tokio::test]
async fn creates_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    let reservation = repo
        .create(CreateReservationParam {
            is_reserved: false,
            student_id: 3,
            instructor_id: 4,
            date: date(2030, 5, 10),
            time: time(9, 45),
            place: "Plac Manewrowy".to_string(),
        })
        .await?;

    let stored = entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.is_reserved);
    assert_eq!(stored.student_id, 3);
    assert_eq!(stored.instructor_id, 4);
    assert_eq!(stored.reservation_date, date(2030, 5, 10));
    assert_eq!(stored.reservation_time, time(9, 45));
    assert_eq!(stored.reservation_place, "Plac Manewrowy");

    Ok(())
}

/// Tests creating two reservations for the same instructor and slot.
///
/// Verifies that overlapping bookings are not detected.
///
/// Expected: Ok with both rows stored
#[tokio::test]
async fn accepts_overlapping_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let param = CreateReservationParam {
        is_reserved: true,
        student_id: 1,
        instructor_id: 1,
        date: date(2030, 5, 10),
        time: time(12, 0),
        place: "Plac".to_string(),
    };

    let repo = ReservationRepository::new(db);
    repo.create(param.clone()).await?;
    repo.create(CreateReservationParam {
        student_id: 2,
        ..param
    })
    .await?;

    assert_eq!(entity::prelude::Reservation::find().count(db).await?, 2);

    Ok(())
}
