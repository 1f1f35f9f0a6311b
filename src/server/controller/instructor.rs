use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        instructor::{InstructorEnvelopeDto, InstructorListDto, InstructorPayloadDto},
    },
    server::{
        error::AppError,
        model::instructor::InstructorParam,
        service::instructor::InstructorService,
        state::AppState,
        util::extract::{IdPath, JsonPayload},
    },
};

/// Tag for grouping instructor endpoints in OpenAPI documentation
pub static INSTRUCTOR_TAG: &str = "instructor";

/// List every instructor.
///
/// # Returns
/// - `200 OK` - All instructors ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/instructors",
    tag = INSTRUCTOR_TAG,
    responses(
        (status = 200, description = "All instructors", body = InstructorListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_instructors(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let instructors = InstructorService::new(&state.db).get_all().await?;

    Ok(Json(InstructorListDto {
        status: StatusCode::OK.as_u16(),
        instructors: instructors.into_iter().map(|s| s.into_dto()).collect(),
    }))
}

/// Get an instructor by ID.
///
/// # Returns
/// - `200 OK` - The instructor
/// - `400 Bad Request` - ID is not a number
/// - `404 Not Found` - No instructor with that ID
#[utoipa::path(
    get,
    path = "/api/instructors/{id}",
    tag = INSTRUCTOR_TAG,
    params(
        ("id" = i64, Path, description = "Instructor ID")
    ),
    responses(
        (status = 200, description = "The instructor", body = InstructorEnvelopeDto),
        (status = 400, description = "ID is not a number", body = ErrorDto),
        (status = 404, description = "Instructor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_instructor(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let instructor = InstructorService::new(&state.db).get(id).await?;

    Ok(Json(InstructorEnvelopeDto {
        status: StatusCode::OK.as_u16(),
        instructor: instructor.into_dto(),
    }))
}

/// Register a new instructor.
///
/// # Returns
/// - `201 Created` - The stored instructor with its assigned ID
/// - `400 Bad Request` - Empty or malformed body
/// - `409 Conflict` - Email already belongs to an instructor
/// - `422 Unprocessable Entity` - One or more fields failed validation
#[utoipa::path(
    post,
    path = "/api/instructors",
    tag = INSTRUCTOR_TAG,
    request_body = InstructorPayloadDto,
    responses(
        (status = 201, description = "Instructor created", body = InstructorEnvelopeDto),
        (status = 400, description = "Empty or malformed body", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_instructor(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<InstructorPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = InstructorParam::from_dto(payload)?;
    let instructor = InstructorService::new(&state.db).create(param).await?;

    Ok((
        StatusCode::CREATED,
        Json(InstructorEnvelopeDto {
            status: StatusCode::CREATED.as_u16(),
            instructor: instructor.into_dto(),
        }),
    ))
}

/// Replace every field of an instructor.
///
/// # Returns
/// - `200 OK` - The updated instructor
/// - `400 Bad Request` - Empty or malformed body, or non-numeric ID
/// - `404 Not Found` - No instructor with that ID
/// - `409 Conflict` - Email belongs to another instructor
/// - `422 Unprocessable Entity` - One or more fields failed validation
#[utoipa::path(
    put,
    path = "/api/instructors/{id}",
    tag = INSTRUCTOR_TAG,
    params(
        ("id" = i64, Path, description = "Instructor ID")
    ),
    request_body = InstructorPayloadDto,
    responses(
        (status = 200, description = "Instructor updated", body = InstructorEnvelopeDto),
        (status = 400, description = "Empty or malformed body", body = ErrorDto),
        (status = 404, description = "Instructor not found", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_instructor(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonPayload(payload): JsonPayload<InstructorPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = InstructorParam::from_dto(payload)?;
    let instructor = InstructorService::new(&state.db).update(id, param).await?;

    Ok(Json(InstructorEnvelopeDto {
        status: StatusCode::OK.as_u16(),
        instructor: instructor.into_dto(),
    }))
}

/// Delete an instructor.
///
/// Reservations referring to the instructor are kept.
///
/// # Returns
/// - `200 OK` - Instructor deleted
/// - `404 Not Found` - No instructor with that ID
#[utoipa::path(
    delete,
    path = "/api/instructors/{id}",
    tag = INSTRUCTOR_TAG,
    params(
        ("id" = i64, Path, description = "Instructor ID")
    ),
    responses(
        (status = 200, description = "Instructor deleted", body = MessageDto),
        (status = 400, description = "ID is not a number", body = ErrorDto),
        (status = 404, description = "Instructor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_instructor(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    InstructorService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto {
        status: StatusCode::OK.as_u16(),
        message: "Instructor deleted successfully".to_string(),
    }))
}
