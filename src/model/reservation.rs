use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    format::{null_as_empty, TimeOfDay},
    validation::FieldErrors,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    #[schema(example = 1)]
    pub id: i32,
    pub is_reserved: bool,
    #[serde(rename = "studentID")]
    #[schema(example = 1)]
    pub student_id: i32,
    #[serde(rename = "instructorID")]
    #[schema(example = 1)]
    pub instructor_id: i32,
    #[schema(value_type = String, example = "2030-05-10")]
    pub reservation_date: NaiveDate,
    #[schema(value_type = String, example = "14:30:00")]
    pub reservation_time: TimeOfDay,
    #[schema(example = "Plac Manewrowy")]
    pub reservation_place: String,
}

/// Request body for creating a reservation.
///
/// Every field is optional at the wire level so that absent values surface as
/// validation messages. `id` must be absent or `null`.
#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationPayloadDto {
    pub id: Option<i32>,
    pub is_reserved: Option<bool>,
    #[serde(rename = "studentID")]
    pub student_id: Option<i32>,
    #[serde(rename = "instructorID")]
    pub instructor_id: Option<i32>,
    #[schema(value_type = Option<String>, example = "2030-05-10")]
    pub reservation_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, example = "14:30")]
    pub reservation_time: Option<TimeOfDay>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(example = "Plac Manewrowy")]
    pub reservation_place: String,
}

impl ReservationPayloadDto {
    /// Every violation in the payload keyed by JSON field name.
    ///
    /// `today` is the earliest accepted reservation date.
    pub fn field_errors(&self, today: NaiveDate) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("isReserved", &self.is_reserved, "Reservation status is required");
        errors.require("studentID", &self.student_id, "Student ID is required");
        errors.require("instructorID", &self.instructor_id, "Instructor ID is required");

        match self.reservation_date {
            None => errors.insert("reservationDate", "Reservation date is required"),
            Some(date) if date < today => errors.insert(
                "reservationDate",
                "Reservation date must be in the present or future",
            ),
            Some(_) => {}
        }

        errors.require("reservationTime", &self.reservation_time, "Reservation time is required");
        errors.require_text(
            "reservationPlace",
            &self.reservation_place,
            "Reservation place is required",
        );
        errors
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ReservationEnvelopeDto {
    #[schema(example = 200)]
    pub status: u16,
    pub reservation: ReservationDto,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ReservationListDto {
    #[schema(example = 200)]
    pub status: u16,
    pub reservations: Vec<ReservationDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 5, 10).unwrap()
    }

    #[test]
    fn accepts_reservation_for_today() {
        let dto: ReservationPayloadDto = serde_json::from_value(serde_json::json!({
            "isReserved": true,
            "studentID": 1,
            "instructorID": 2,
            "reservationDate": "2030-05-10",
            "reservationTime": "09:00",
            "reservationPlace": "Plac Manewrowy"
        }))
        .unwrap();

        assert!(dto.field_errors(today()).is_empty());
        assert_eq!(dto.reservation_time.unwrap().to_string(), "09:00:00");
    }

    #[test]
    fn rejects_past_date() {
        let dto: ReservationPayloadDto = serde_json::from_value(serde_json::json!({
            "isReserved": false,
            "studentID": 1,
            "instructorID": 2,
            "reservationDate": "2030-05-09",
            "reservationTime": "09:00:00",
            "reservationPlace": "Plac Manewrowy"
        }))
        .unwrap();

        let errors = dto.field_errors(today());
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("reservationDate"),
            Some("Reservation date must be in the present or future")
        );
    }

    #[test]
    fn empty_payload_reports_every_required_field() {
        let errors = ReservationPayloadDto::default().field_errors(today());

        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get("isReserved"), Some("Reservation status is required"));
        assert_eq!(errors.get("reservationDate"), Some("Reservation date is required"));
        assert_eq!(errors.get("reservationPlace"), Some("Reservation place is required"));
    }

    #[test]
    fn serializes_reference_ids_in_upper_case() {
        let dto = ReservationDto {
            id: 4,
            is_reserved: true,
            student_id: 1,
            instructor_id: 2,
            reservation_date: today(),
            reservation_time: TimeOfDay::parse("15:30").unwrap(),
            reservation_place: "Plac".to_string(),
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["studentID"], 1);
        assert_eq!(json["instructorID"], 2);
        assert_eq!(json["reservationDate"], "2030-05-10");
        assert_eq!(json["reservationTime"], "15:30:00");
    }
}
