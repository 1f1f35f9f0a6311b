use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        student::{StudentEnvelopeDto, StudentListDto, StudentPayloadDto},
    },
    server::{
        error::AppError,
        model::student::StudentParam,
        service::student::StudentService,
        state::AppState,
        util::extract::{IdPath, JsonPayload},
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// List every student.
///
/// # Returns
/// - `200 OK` - All students ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "All students", body = StudentListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).get_all().await?;

    Ok(Json(StudentListDto {
        status: StatusCode::OK.as_u16(),
        students: students.into_iter().map(|s| s.into_dto()).collect(),
    }))
}

/// Get a student by ID.
///
/// # Returns
/// - `200 OK` - The student
/// - `400 Bad Request` - ID is not a number
/// - `404 Not Found` - No student with that ID
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "The student", body = StudentEnvelopeDto),
        (status = 400, description = "ID is not a number", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db).get(id).await?;

    Ok(Json(StudentEnvelopeDto {
        status: StatusCode::OK.as_u16(),
        student: student.into_dto(),
    }))
}

/// Register a new student.
///
/// Every field violation is reported at once in the `errors` map.
///
/// # Returns
/// - `201 Created` - The stored student with its assigned ID
/// - `400 Bad Request` - Empty or malformed body
/// - `422 Unprocessable Entity` - One or more fields failed validation
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = StudentPayloadDto,
    responses(
        (status = 201, description = "Student created", body = StudentEnvelopeDto),
        (status = 400, description = "Empty or malformed body", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<StudentPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = StudentParam::from_dto(payload)?;
    let student = StudentService::new(&state.db).create(param).await?;

    Ok((
        StatusCode::CREATED,
        Json(StudentEnvelopeDto {
            status: StatusCode::CREATED.as_u16(),
            student: student.into_dto(),
        }),
    ))
}

/// Replace every field of a student.
///
/// # Returns
/// - `200 OK` - The updated student
/// - `400 Bad Request` - Empty or malformed body, or non-numeric ID
/// - `404 Not Found` - No student with that ID
/// - `422 Unprocessable Entity` - One or more fields failed validation
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    request_body = StudentPayloadDto,
    responses(
        (status = 200, description = "Student updated", body = StudentEnvelopeDto),
        (status = 400, description = "Empty or malformed body", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonPayload(payload): JsonPayload<StudentPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = StudentParam::from_dto(payload)?;
    let student = StudentService::new(&state.db).update(id, param).await?;

    Ok(Json(StudentEnvelopeDto {
        status: StatusCode::OK.as_u16(),
        student: student.into_dto(),
    }))
}

/// Delete a student.
///
/// Reservations referring to the student are kept.
///
/// # Returns
/// - `200 OK` - Student deleted
/// - `404 Not Found` - No student with that ID
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student deleted", body = MessageDto),
        (status = 400, description = "ID is not a number", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    StudentService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto {
        status: StatusCode::OK.as_u16(),
        message: "Student deleted successfully".to_string(),
    }))
}
