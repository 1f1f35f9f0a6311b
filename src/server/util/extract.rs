//! Request extractors that report failures through [`AppError`].
//!
//! Axum's own `Json` and `Path` extractors answer with plain-text rejections. These
//! wrappers keep the error envelope uniform and distinguish an empty body from an
//! unparseable one.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{StatusCode, request::Parts},
};
use serde::de::DeserializeOwned;

use crate::server::error::AppError;

const EMPTY_BODY: &str = "Request body cannot be empty";
const INVALID_JSON: &str = "Invalid JSON format";

/// JSON request body deserialized into `T`.
///
/// No `Content-Type` check is made; partial update endpoints receive bare JSON
/// scalars from clients that do not always set the header.
#[derive(Debug)]
pub struct JsonPayload<T>(pub T);

impl<T, S> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = read_body(req, state).await?;

        serde_json::from_slice(&bytes).map(JsonPayload).map_err(|e| {
            tracing::debug!("Rejected request body: {}", e);
            AppError::BadRequest(INVALID_JSON.to_string())
        })
    }
}

/// Text request body given either as a JSON string or as raw text.
#[derive(Debug)]
pub struct TextPayload(pub String);

impl<S> FromRequest<S> for TextPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = read_body(req, state).await?;

        if let Ok(text) = serde_json::from_slice::<String>(&bytes) {
            return Ok(TextPayload(text));
        }

        String::from_utf8(bytes.to_vec())
            .map(|text| TextPayload(text.trim().to_string()))
            .map_err(|_| AppError::BadRequest(INVALID_JSON.to_string()))
    }
}

async fn read_body<S>(req: Request, state: &S) -> Result<Bytes, AppError>
where
    S: Send + Sync,
{
    let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            tracing::debug!("Failed to read request body: {}", rejection.body_text());
            AppError::BadRequest(INVALID_JSON.to_string())
        }
    })?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::BadRequest(EMPTY_BODY.to_string()));
    }

    Ok(bytes)
}

/// Numeric `{id}` path segment.
///
/// Parsed wider than the primary key so that a well-formed but out-of-range ID
/// reaches the service and is reported as not found.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        raw.parse::<i64>().map(IdPath).map_err(|e| {
            AppError::BadRequest(format!(
                "Invalid parameter type: '{}' is not a valid id ({})",
                raw, e
            ))
        })
    }
}
