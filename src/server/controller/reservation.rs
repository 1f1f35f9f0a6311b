use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{Local, NaiveDate};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        format::TimeOfDay,
        reservation::{ReservationEnvelopeDto, ReservationListDto, ReservationPayloadDto},
    },
    server::{
        error::AppError,
        model::reservation::{CreateReservationParam, Reservation, ReservationChange},
        service::reservation::ReservationService,
        state::AppState,
        util::extract::{IdPath, JsonPayload, TextPayload},
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

fn envelope(reservation: Reservation) -> Json<ReservationEnvelopeDto> {
    Json(ReservationEnvelopeDto {
        status: StatusCode::OK.as_u16(),
        reservation: reservation.into_dto(),
    })
}

fn list(reservations: Vec<Reservation>) -> Json<ReservationListDto> {
    Json(ReservationListDto {
        status: StatusCode::OK.as_u16(),
        reservations: reservations.into_iter().map(|r| r.into_dto()).collect(),
    })
}

#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "All reservations", body = ReservationListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let reservations = ReservationService::new(&state.db).get_all().await?;

    Ok(list(reservations))
}

#[utoipa::path(
    get,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i64, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "The reservation", body = ReservationEnvelopeDto),
        (status = 400, description = "ID is not a number", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(&state.db).get(id).await?;

    Ok(envelope(reservation))
}

/// List reservations booked by a student.
///
/// The student is not looked up; an unknown ID yields an empty list.
#[utoipa::path(
    get,
    path = "/api/reservations/student/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Reservations of the student", body = ReservationListDto),
        (status = 400, description = "ID is not a number", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_reservations(
    State(state): State<AppState>,
    IdPath(student_id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let reservations = ReservationService::new(&state.db)
        .get_by_student(student_id)
        .await?;

    Ok(list(reservations))
}

/// List reservations assigned to an instructor.
///
/// The instructor is not looked up; an unknown ID yields an empty list.
#[utoipa::path(
    get,
    path = "/api/reservations/instructor/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i64, Path, description = "Instructor ID")
    ),
    responses(
        (status = 200, description = "Reservations of the instructor", body = ReservationListDto),
        (status = 400, description = "ID is not a number", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_instructor_reservations(
    State(state): State<AppState>,
    IdPath(instructor_id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let reservations = ReservationService::new(&state.db)
        .get_by_instructor(instructor_id)
        .await?;

    Ok(list(reservations))
}

/// Book a new reservation.
///
/// The reservation date must be today or later in the server's local time zone.
/// A payload carrying an `id` is rejected before any field is validated.
///
/// # Returns
/// - `201 Created` - The stored reservation with its assigned ID
/// - `400 Bad Request` - Empty or malformed body, or `id` present
/// - `422 Unprocessable Entity` - One or more fields failed validation
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    request_body = ReservationPayloadDto,
    responses(
        (status = 201, description = "Reservation created", body = ReservationEnvelopeDto),
        (status = 400, description = "Empty or malformed body, or id present", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<ReservationPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let today = Local::now().date_naive();
    let param = CreateReservationParam::from_dto(payload, today)?;
    let reservation = ReservationService::new(&state.db).create(param).await?;

    Ok((
        StatusCode::CREATED,
        Json(ReservationEnvelopeDto {
            status: StatusCode::CREATED.as_u16(),
            reservation: reservation.into_dto(),
        }),
    ))
}

/// Change the time of a reservation.
///
/// Body is a JSON string in `HH:mm` or `HH:mm:ss` form.
#[utoipa::path(
    put,
    path = "/api/reservations/{id}/time",
    tag = RESERVATION_TAG,
    params(
        ("id" = i64, Path, description = "Reservation ID")
    ),
    request_body(content = String, example = json!("15:30")),
    responses(
        (status = 200, description = "Reservation updated", body = ReservationEnvelopeDto),
        (status = 400, description = "Empty or malformed body", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reservation_time(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonPayload(TimeOfDay(time)): JsonPayload<TimeOfDay>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(&state.db)
        .update_field(id, ReservationChange::Time(time))
        .await?;

    Ok(envelope(reservation))
}

/// Change the date of a reservation.
///
/// Body is a JSON string in `YYYY-MM-DD` form. Past dates are accepted here.
#[utoipa::path(
    put,
    path = "/api/reservations/{id}/date",
    tag = RESERVATION_TAG,
    params(
        ("id" = i64, Path, description = "Reservation ID")
    ),
    request_body(content = String, example = json!("2030-05-10")),
    responses(
        (status = 200, description = "Reservation updated", body = ReservationEnvelopeDto),
        (status = 400, description = "Empty or malformed body", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reservation_date(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonPayload(date): JsonPayload<NaiveDate>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(&state.db)
        .update_field(id, ReservationChange::Date(date))
        .await?;

    Ok(envelope(reservation))
}

/// Reassign a reservation to another instructor.
#[utoipa::path(
    put,
    path = "/api/reservations/{id}/instructor",
    tag = RESERVATION_TAG,
    params(
        ("id" = i64, Path, description = "Reservation ID")
    ),
    request_body(content = i32, example = json!(5)),
    responses(
        (status = 200, description = "Reservation updated", body = ReservationEnvelopeDto),
        (status = 400, description = "Empty or malformed body", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reservation_instructor(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonPayload(instructor_id): JsonPayload<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(&state.db)
        .update_field(id, ReservationChange::Instructor(instructor_id))
        .await?;

    Ok(envelope(reservation))
}

/// Reassign a reservation to another student.
#[utoipa::path(
    put,
    path = "/api/reservations/{id}/student",
    tag = RESERVATION_TAG,
    params(
        ("id" = i64, Path, description = "Reservation ID")
    ),
    request_body(content = i32, example = json!(5)),
    responses(
        (status = 200, description = "Reservation updated", body = ReservationEnvelopeDto),
        (status = 400, description = "Empty or malformed body", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reservation_student(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonPayload(student_id): JsonPayload<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(&state.db)
        .update_field(id, ReservationChange::Student(student_id))
        .await?;

    Ok(envelope(reservation))
}

/// Move a reservation to another place.
///
/// Body is either a JSON string or raw text.
#[utoipa::path(
    put,
    path = "/api/reservations/{id}/place",
    tag = RESERVATION_TAG,
    params(
        ("id" = i64, Path, description = "Reservation ID")
    ),
    request_body(content = String, example = json!("Plac Manewrowy")),
    responses(
        (status = 200, description = "Reservation updated", body = ReservationEnvelopeDto),
        (status = 400, description = "Empty body", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reservation_place(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    TextPayload(place): TextPayload,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(&state.db)
        .update_field(id, ReservationChange::Place(place))
        .await?;

    Ok(envelope(reservation))
}

#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i64, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation deleted", body = MessageDto),
        (status = 400, description = "ID is not a number", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    ReservationService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto {
        status: StatusCode::OK.as_u16(),
        message: "Reservation deleted successfully".to_string(),
    }))
}
