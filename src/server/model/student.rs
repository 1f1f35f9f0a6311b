//! Student domain model and parameters.

use crate::{
    model::student::{StudentDto, StudentPayloadDto},
    server::error::AppError,
};

/// A registered driving school student.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub email: String,
    /// Stored and returned as given.
    pub password: String,
    pub name_of_school: Option<String>,
}

impl Student {
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            name: self.name,
            surname: self.surname,
            email: self.email,
            password: self.password,
            name_of_school: self.name_of_school,
        }
    }

    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            surname: entity.surname,
            email: entity.email,
            password: entity.password,
            name_of_school: entity.name_of_school,
        }
    }
}

/// Validated fields for creating or fully replacing a student.
#[derive(Debug, Clone)]
pub struct StudentParam {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    pub name_of_school: Option<String>,
}

impl StudentParam {
    /// Validates a request payload and converts it into parameters.
    ///
    /// # Returns
    /// - `Ok(StudentParam)` - Payload passed every field rule
    /// - `Err(AppError::Validation)` - Map of every violated field
    pub fn from_dto(dto: StudentPayloadDto) -> Result<Self, AppError> {
        let errors = dto.field_errors();
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        Ok(Self {
            name: dto.name,
            surname: dto.surname,
            email: dto.email,
            password: dto.password,
            name_of_school: dto.name_of_school,
        })
    }
}
