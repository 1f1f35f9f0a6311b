//! Student service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::student::StudentRepository,
    error::AppError,
    model::student::{Student, StudentParam},
};

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Student not found with ID: {}", id))
}

/// Narrows a path ID to the primary key type; IDs outside its range cannot exist.
fn key(id: i64) -> Result<i32, AppError> {
    i32::try_from(id).map_err(|_| not_found(id))
}

/// Service providing business logic for student management.
pub struct StudentService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    /// Creates a new StudentService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a student by ID.
    ///
    /// # Returns
    /// - `Ok(Student)` - Student found
    /// - `Err(AppError::NotFound)` - No student with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get(&self, id: i64) -> Result<Student, AppError> {
        StudentRepository::new(self.db)
            .find_by_id(key(id)?)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Retrieves every student ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        Ok(StudentRepository::new(self.db).find_all().await?)
    }

    /// Stores a new student.
    pub async fn create(&self, param: StudentParam) -> Result<Student, AppError> {
        let student = StudentRepository::new(self.db).create(param).await?;

        tracing::info!("Created student {}", student.id);

        Ok(student)
    }

    /// Replaces every field of an existing student.
    ///
    /// # Returns
    /// - `Ok(Student)` - The updated student
    /// - `Err(AppError::NotFound)` - No student with that ID; nothing was written
    /// - `Err(AppError::DbErr)` - Database error during query or update
    pub async fn update(&self, id: i64, param: StudentParam) -> Result<Student, AppError> {
        StudentRepository::new(self.db)
            .update(key(id)?, param)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a student.
    ///
    /// # Returns
    /// - `Ok(())` - Student deleted
    /// - `Err(AppError::NotFound)` - No student with that ID
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !StudentRepository::new(self.db).delete(key(id)?).await? {
            return Err(not_found(id));
        }

        tracing::info!("Deleted student {}", id);

        Ok(())
    }
}
