//! Instructor service for business logic.
//!
//! Enforces unique instructor emails before writing. The unique index on the
//! column still catches a concurrent duplicate, which surfaces as a conflict
//! through `AppError::DbErr`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::instructor::InstructorRepository,
    error::AppError,
    model::instructor::{Instructor, InstructorParam},
};

const EMAIL_TAKEN: &str = "Instructor with this email already exists";

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Instructor not found with ID: {}", id))
}

/// Narrows a path ID to the primary key type; IDs outside its range cannot exist.
fn key(id: i64) -> Result<i32, AppError> {
    i32::try_from(id).map_err(|_| not_found(id))
}

/// Service providing business logic for instructor management.
pub struct InstructorService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> InstructorService<'a> {
    /// Creates a new InstructorService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves an instructor by ID.
    ///
    /// # Returns
    /// - `Ok(Instructor)` - Instructor found
    /// - `Err(AppError::NotFound)` - No instructor with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get(&self, id: i64) -> Result<Instructor, AppError> {
        InstructorRepository::new(self.db)
            .find_by_id(key(id)?)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Retrieves every instructor ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Instructor>, AppError> {
        Ok(InstructorRepository::new(self.db).find_all().await?)
    }

    /// Stores a new instructor.
    ///
    /// # Returns
    /// - `Ok(Instructor)` - The stored instructor
    /// - `Err(AppError::Conflict)` - Email already belongs to an instructor
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn create(&self, param: InstructorParam) -> Result<Instructor, AppError> {
        let repo = InstructorRepository::new(self.db);

        if repo.email_taken(&param.email, None).await? {
            return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
        }

        let instructor = repo.create(param).await?;

        tracing::info!("Created instructor {}", instructor.id);

        Ok(instructor)
    }

    /// Replaces every field of an existing instructor.
    ///
    /// The instructor may keep its own email; taking another instructor's email
    /// is a conflict.
    ///
    /// # Returns
    /// - `Ok(Instructor)` - The updated instructor
    /// - `Err(AppError::NotFound)` - No instructor with that ID; nothing was written
    /// - `Err(AppError::Conflict)` - Email belongs to another instructor
    /// - `Err(AppError::DbErr)` - Database error during query or update
    pub async fn update(&self, id: i64, param: InstructorParam) -> Result<Instructor, AppError> {
        let repo = InstructorRepository::new(self.db);
        let pk = key(id)?;

        if repo.find_by_id(pk).await?.is_none() {
            return Err(not_found(id));
        }

        if repo.email_taken(&param.email, Some(pk)).await? {
            return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
        }

        repo.update(pk, param).await?.ok_or_else(|| not_found(id))
    }

    /// Deletes an instructor.
    ///
    /// # Returns
    /// - `Ok(())` - Instructor deleted
    /// - `Err(AppError::NotFound)` - No instructor with that ID
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !InstructorRepository::new(self.db).delete(key(id)?).await? {
            return Err(not_found(id));
        }

        tracing::info!("Deleted instructor {}", id);

        Ok(())
    }
}
