//! Instructor factory for creating test instructor entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test instructors with customizable fields.
///
/// Emails default to a unique generated address, since the instructors table
/// enforces email uniqueness.
pub struct InstructorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    surname: String,
    email: String,
    password: String,
    name_of_school: Option<String>,
}

impl<'a> InstructorFactory<'a> {
    /// Creates a new InstructorFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Anna"`
    /// - surname: `"Nowak"`
    /// - email: `"instructor{id}@example.com"` where id is auto-incremented
    /// - password: `"password123"`
    /// - name_of_school: `Some("AutoSzkola ABC")`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: "Anna".to_string(),
            surname: "Nowak".to_string(),
            email: format!("instructor{}@example.com", id),
            password: "password123".to_string(),
            name_of_school: Some("AutoSzkola ABC".to_string()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name_of_school(mut self, name_of_school: Option<String>) -> Self {
        self.name_of_school = name_of_school;
        self
    }

    /// Builds and inserts the instructor entity into the database.
    pub async fn build(self) -> Result<entity::instructor::Model, DbErr> {
        entity::instructor::ActiveModel {
            name: ActiveValue::Set(self.name),
            surname: ActiveValue::Set(self.surname),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            name_of_school: ActiveValue::Set(self.name_of_school),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an instructor with default values.
pub async fn create_instructor(
    db: &DatabaseConnection,
) -> Result<entity::instructor::Model, DbErr> {
    InstructorFactory::new(db).build().await
}
