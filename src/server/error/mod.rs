//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by services and handlers. Its
//! `IntoResponse` implementation is the only place status codes for failures are
//! chosen, so every endpoint reports errors with the same envelope:
//! `{status, error}` for single messages and `{status, errors}` for validation.

pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        validation::FieldErrors,
    },
    server::error::{config::ConfigError, internal::InternalError},
};

/// Message returned to clients for any failure that is not their fault.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Unique constraint violations become 409 Conflict; anything else is a 500
    /// with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Unexpected condition inside the application, always a 500.
    #[error(transparent)]
    Internal(#[from] InternalError),

    /// Resource not found, 404.
    #[error("{0}")]
    NotFound(String),

    /// Malformed request: empty or unparseable body, wrong path parameter type, or
    /// a field the client must not send. 400.
    #[error("{0}")]
    BadRequest(String),

    /// Request body over the size limit, 413.
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Payload parsed but broke one or more field rules, 422.
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),

    /// Request conflicts with existing data, 409.
    #[error("{0}")]
    Conflict(String),
}

impl AppError {
    fn message(status: StatusCode, error: impl Into<String>) -> Response {
        (
            status,
            Json(ErrorDto {
                status: status.as_u16(),
                error: error.into(),
            }),
        )
            .into_response()
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `BadRequest`
/// - 404 Not Found - `NotFound`
/// - 409 Conflict - `Conflict` and unique constraint violations
/// - 413 Payload Too Large - `PayloadTooLarge`
/// - 422 Unprocessable Entity - `Validation`, with the field map
/// - 500 Internal Server Error - everything else, logged with full detail
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => Self::message(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => Self::message(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => Self::message(StatusCode::CONFLICT, msg),
            Self::PayloadTooLarge(msg) => Self::message(StatusCode::PAYLOAD_TOO_LARGE, msg),
            Self::Validation(errors) => {
                let status = StatusCode::UNPROCESSABLE_ENTITY;
                (
                    status,
                    Json(ValidationErrorDto {
                        status: status.as_u16(),
                        errors,
                    }),
                )
                    .into_response()
            }
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::warn!("Unique constraint violation: {}", detail);
                    Self::message(StatusCode::CONFLICT, "Resource already exists")
                }
                _ => InternalServerError(err).into_response(),
            },
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a logged 500 response.
///
/// The client only ever sees [`UNEXPECTED_ERROR`].
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        AppError::message(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR)
    }
}
