use axum::Json;
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        instructor::{
            InstructorDto, InstructorEnvelopeDto, InstructorListDto, InstructorPayloadDto,
        },
        reservation::{
            ReservationDto, ReservationEnvelopeDto, ReservationListDto, ReservationPayloadDto,
        },
        student::{StudentDto, StudentEnvelopeDto, StudentListDto, StudentPayloadDto},
        validation::FieldErrors,
    },
    server::controller::{instructor, reservation, student},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SkillWheel",
        description = "Booking API for driving school students, instructors and reservations"
    ),
    paths(
        student::get_students,
        student::get_student,
        student::create_student,
        student::update_student,
        student::delete_student,
        instructor::get_instructors,
        instructor::get_instructor,
        instructor::create_instructor,
        instructor::update_instructor,
        instructor::delete_instructor,
        reservation::get_reservations,
        reservation::get_reservation,
        reservation::get_student_reservations,
        reservation::get_instructor_reservations,
        reservation::create_reservation,
        reservation::update_reservation_time,
        reservation::update_reservation_date,
        reservation::update_reservation_instructor,
        reservation::update_reservation_student,
        reservation::update_reservation_place,
        reservation::delete_reservation,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        ValidationErrorDto,
        FieldErrors,
        StudentDto,
        StudentPayloadDto,
        StudentEnvelopeDto,
        StudentListDto,
        InstructorDto,
        InstructorPayloadDto,
        InstructorEnvelopeDto,
        InstructorListDto,
        ReservationDto,
        ReservationPayloadDto,
        ReservationEnvelopeDto,
        ReservationListDto,
    )),
    tags(
        (name = "student", description = "Student management"),
        (name = "instructor", description = "Instructor management"),
        (name = "reservation", description = "Lesson reservations"),
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document.
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
