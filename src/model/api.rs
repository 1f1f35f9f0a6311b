use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::validation::FieldErrors;

/// Error envelope carrying a single message.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    #[schema(example = 404)]
    pub status: u16,
    #[schema(example = "Student not found with ID: 1")]
    pub error: String,
}

/// Error envelope for payloads that failed field validation.
#[derive(Serialize, Debug, ToSchema)]
pub struct ValidationErrorDto {
    #[schema(example = 422)]
    pub status: u16,
    pub errors: FieldErrors,
}

/// Envelope for operations that only report an outcome, such as deletes.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageDto {
    #[schema(example = 200)]
    pub status: u16,
    #[schema(example = "Student deleted successfully")]
    pub message: String,
}
