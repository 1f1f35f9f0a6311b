//! Reservation factory for creating test reservation entities.

use chrono::{Duration, Local, NaiveDate, NaiveTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let reservation = ReservationFactory::new(&db, student.id, instructor.id)
///     .reservation_place("Plac Manewrowy")
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    is_reserved: bool,
    student_id: i32,
    instructor_id: i32,
    reservation_date: NaiveDate,
    reservation_time: NaiveTime,
    reservation_place: String,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - is_reserved: `true`
    /// - reservation_date: seven days from today
    /// - reservation_time: `14:30:00`
    /// - reservation_place: `"Plac Manewrowy"`
    pub fn new(db: &'a DatabaseConnection, student_id: i32, instructor_id: i32) -> Self {
        Self {
            db,
            is_reserved: true,
            student_id,
            instructor_id,
            reservation_date: Local::now().date_naive() + Duration::days(7),
            reservation_time: NaiveTime::from_hms_opt(14, 30, 0).unwrap_or_default(),
            reservation_place: "Plac Manewrowy".to_string(),
        }
    }

    pub fn is_reserved(mut self, is_reserved: bool) -> Self {
        self.is_reserved = is_reserved;
        self
    }

    pub fn reservation_date(mut self, reservation_date: NaiveDate) -> Self {
        self.reservation_date = reservation_date;
        self
    }

    pub fn reservation_time(mut self, reservation_time: NaiveTime) -> Self {
        self.reservation_time = reservation_time;
        self
    }

    pub fn reservation_place(mut self, reservation_place: impl Into<String>) -> Self {
        self.reservation_place = reservation_place.into();
        self
    }

    /// Builds and inserts the reservation entity into the database.
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            is_reserved: ActiveValue::Set(self.is_reserved),
            student_id: ActiveValue::Set(self.student_id),
            instructor_id: ActiveValue::Set(self.instructor_id),
            reservation_date: ActiveValue::Set(self.reservation_date),
            reservation_time: ActiveValue::Set(self.reservation_time),
            reservation_place: ActiveValue::Set(self.reservation_place),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation with default values for the given student and instructor.
pub async fn create_reservation(
    db: &DatabaseConnection,
    student_id: i32,
    instructor_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, student_id, instructor_id)
        .build()
        .await
}
