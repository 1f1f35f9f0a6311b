//! Instructor domain model and parameters.
//!
//! Instructors share the student shape; what sets them apart is that an email
//! address may belong to at most one instructor.

use crate::{
    model::instructor::{InstructorDto, InstructorPayloadDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Instructor {
    pub id: i32,
    pub name: String,
    pub surname: String,
    /// Unique across instructors.
    pub email: String,
    pub password: String,
    pub name_of_school: Option<String>,
}

impl Instructor {
    pub fn into_dto(self) -> InstructorDto {
        InstructorDto {
            id: self.id,
            name: self.name,
            surname: self.surname,
            email: self.email,
            password: self.password,
            name_of_school: self.name_of_school,
        }
    }

    pub fn from_entity(entity: entity::instructor::Model) -> Self {
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

/// Validated fields for creating or fully replacing an instructor.
#[derive(Debug, Clone)]
pub struct InstructorParam {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    pub name_of_school: Option<String>,
}

impl InstructorParam {
    /// Validates a request payload and converts it into parameters.
    ///
    /// # Returns
    /// - `Ok(InstructorParam)` - Payload passed every field rule
    /// - `Err(AppError::Validation)` - Map of every violated field
    pub fn from_dto(dto: InstructorPayloadDto) -> Result<Self, AppError> {
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
