use super::*;

/// Tests deleting a reservation twice.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_reservation_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reservation = factory::create_reservation(db, 1, 1).await?;

    let repo = ReservationRepository::new(db);
    assert!(repo.delete(reservation.id).await?);
    assert!(!repo.delete(reservation.id).await?);
    assert_eq!(entity::prelude::Reservation::find().count(db).await?, 0);

    Ok(())
}
