use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::{format::null_as_empty, validation::FieldErrors};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstructorDto {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Anna")]
    pub name: String,
    #[schema(example = "Nowak")]
    pub surname: String,
    #[schema(example = "anna.nowak@example.com")]
    pub email: String,
    pub password: String,
    #[schema(example = "AutoSzkola ABC")]
    pub name_of_school: Option<String>,
}

/// Request body for creating or replacing an instructor.
///
/// Missing or `null` text fields deserialize as empty strings and are reported by
/// [`InstructorPayloadDto::field_errors`] rather than rejected as malformed JSON.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstructorPayloadDto {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 2, max = 50, message = "Name must be between 2 and 50 characters"))]
    #[schema(example = "Anna")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 2, max = 50, message = "Surname must be between 2 and 50 characters"))]
    #[schema(example = "Nowak")]
    pub surname: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(email(message = "Email should be valid"))]
    #[schema(example = "anna.nowak@example.com")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    #[schema(example = "password123")]
    pub password: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "School name must be less than 100 characters"))]
    pub name_of_school: Option<String>,
}

impl InstructorPayloadDto {
    /// Every violation in the payload keyed by JSON field name, empty when valid.
    pub fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::from_validation(self.validate(), Self::json_field);
        errors.require_text("name", &self.name, "Name is mandatory");
        errors.require_text("surname", &self.surname, "Surname is mandatory");
        errors.require_text("email", &self.email, "Email is mandatory");
        errors.require_text("password", &self.password, "Password is mandatory");
        errors
    }

    fn json_field(field: &str) -> &str {
        match field {
            "name_of_school" => "nameOfSchool",
            other => other,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct InstructorEnvelopeDto {
    #[schema(example = 200)]
    pub status: u16,
    pub instructor: InstructorDto,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct InstructorListDto {
    #[schema(example = 200)]
    pub status: u16,
    pub instructors: Vec<InstructorDto>,
}
