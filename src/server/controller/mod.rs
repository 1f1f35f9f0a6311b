//! HTTP request handlers.
//!
//! Handlers extract the request, convert payload DTOs into validated parameters,
//! call the matching service and wrap the result in a response envelope. Failures
//! propagate as `AppError` and are rendered by its `IntoResponse` implementation.

pub mod docs;
pub mod instructor;
pub mod reservation;
pub mod student;

#[cfg(test)]
pub(crate) mod testing;
