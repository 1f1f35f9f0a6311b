//! Reservation domain model, creation parameters and single-field changes.
//!
//! A reservation refers to a student and an instructor by id only. Nothing checks
//! that either exists, and overlapping reservations are accepted.

use chrono::{NaiveDate, NaiveTime};

use crate::{
    model::{
        format::TimeOfDay,
        reservation::{ReservationDto, ReservationPayloadDto},
        validation::FieldErrors,
    },
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    /// Whether the booking has been confirmed.
    pub is_reserved: bool,
    pub student_id: i32,
    pub instructor_id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub place: String,
}

impl Reservation {
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            is_reserved: self.is_reserved,
            student_id: self.student_id,
            instructor_id: self.instructor_id,
            reservation_date: self.date,
            reservation_time: TimeOfDay(self.time),
            reservation_place: self.place,
        }
    }

    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            is_reserved: entity.is_reserved,
            student_id: entity.student_id,
            instructor_id: entity.instructor_id,
            date: entity.reservation_date,
            time: entity.reservation_time,
            place: entity.reservation_place,
        }
    }
}

/// Validated fields for a new reservation.
#[derive(Debug, Clone)]
pub struct CreateReservationParam {
    pub is_reserved: bool,
    pub student_id: i32,
    pub instructor_id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub place: String,
}

impl CreateReservationParam {
    /// Validates a creation payload against `today` and converts it into parameters.
    ///
    /// A client-supplied id is rejected before any field rule is evaluated.
    ///
    /// # Returns
    /// - `Ok(CreateReservationParam)` - Payload is valid
    /// - `Err(AppError::BadRequest)` - Payload carried an `id`
    /// - `Err(AppError::Validation)` - Map of every violated field
    pub fn from_dto(dto: ReservationPayloadDto, today: NaiveDate) -> Result<Self, AppError> {
        if dto.id.is_some() {
            return Err(AppError::BadRequest(
                "New reservation should not have an ID".to_string(),
            ));
        }

        let errors = dto.field_errors(today);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let (
            Some(is_reserved),
            Some(student_id),
            Some(instructor_id),
            Some(date),
            Some(TimeOfDay(time)),
        ) = (
            dto.is_reserved,
            dto.student_id,
            dto.instructor_id,
            dto.reservation_date,
            dto.reservation_time,
        )
        else {
            // every None is already reported by field_errors
            return Err(AppError::Validation(FieldErrors::new()));
        };

        Ok(Self {
            is_reserved,
            student_id,
            instructor_id,
            date,
            time,
            place: dto.reservation_place,
        })
    }
}

/// A single-field modification of an existing reservation.
#[derive(Debug, Clone, PartialEq)]
pub enum ReservationChange {
    Time(NaiveTime),
    Date(NaiveDate),
    Instructor(i32),
    Student(i32),
    Place(String),
}
