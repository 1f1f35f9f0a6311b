//! Reservation service for business logic.
//!
//! Student and instructor IDs on a reservation are taken as given; this service
//! does not look them up and does not detect overlapping bookings.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::reservation::ReservationRepository,
    error::AppError,
    model::reservation::{CreateReservationParam, Reservation, ReservationChange},
};

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Reservation not found with ID: {}", id))
}

/// Narrows a path ID to the primary key type; IDs outside its range cannot exist.
fn key(id: i64) -> Result<i32, AppError> {
    i32::try_from(id).map_err(|_| not_found(id))
}

/// Service providing business logic for reservations.
pub struct ReservationService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    /// Creates a new ReservationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a reservation by ID.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Reservation found
    /// - `Err(AppError::NotFound)` - No reservation with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get(&self, id: i64) -> Result<Reservation, AppError> {
        ReservationRepository::new(self.db)
            .find_by_id(key(id)?)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_all(&self) -> Result<Vec<Reservation>, AppError> {
        Ok(ReservationRepository::new(self.db).find_all().await?)
    }

    /// Reservations of one student; an unknown student yields an empty list.
    pub async fn get_by_student(&self, student_id: i64) -> Result<Vec<Reservation>, AppError> {
        let Ok(student_id) = i32::try_from(student_id) else {
            return Ok(Vec::new());
        };

        Ok(ReservationRepository::new(self.db)
            .find_by_student_id(student_id)
            .await?)
    }

    /// Reservations of one instructor; an unknown instructor yields an empty list.
    pub async fn get_by_instructor(
        &self,
        instructor_id: i64,
    ) -> Result<Vec<Reservation>, AppError> {
        let Ok(instructor_id) = i32::try_from(instructor_id) else {
            return Ok(Vec::new());
        };

        Ok(ReservationRepository::new(self.db)
            .find_by_instructor_id(instructor_id)
            .await?)
    }

    /// Stores a new reservation.
    pub async fn create(&self, param: CreateReservationParam) -> Result<Reservation, AppError> {
        let reservation = ReservationRepository::new(self.db).create(param).await?;

        tracing::info!(
            "Created reservation {} for student {} with instructor {}",
            reservation.id,
            reservation.student_id,
            reservation.instructor_id
        );

        Ok(reservation)
    }

    /// Changes one field of an existing reservation.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The reservation after the change
    /// - `Err(AppError::NotFound)` - No reservation with that ID; nothing was written
    /// - `Err(AppError::DbErr)` - Database error during query or update
    pub async fn update_field(
        &self,
        id: i64,
        change: ReservationChange,
    ) -> Result<Reservation, AppError> {
        ReservationRepository::new(self.db)
            .update_field(key(id)?, change)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a reservation.
    ///
    /// # Returns
    /// - `Ok(())` - Reservation deleted
    /// - `Err(AppError::NotFound)` - No reservation with that ID
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !ReservationRepository::new(self.db).delete(key(id)?).await? {
            return Err(not_found(id));
        }

        tracing::info!("Deleted reservation {}", id);

        Ok(())
    }
}
