//! Instructor data repository for database operations.
//!
//! Besides CRUD this provides the email lookup used to keep instructor emails
//! unique before the database index has to.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QueryTrait,
};

use crate::server::model::instructor::{Instructor, InstructorParam};

/// Repository providing database operations for instructor management.
pub struct InstructorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InstructorRepository<'a> {
    /// Creates a new InstructorRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new instructor.
    ///
    /// # Returns
    /// - `Ok(Instructor)` - The stored instructor with its assigned ID
    /// - `Err(DbErr)` - Database error during insert, including a unique email
    ///   violation
    pub async fn create(&self, param: InstructorParam) -> Result<Instructor, DbErr> {
        let entity = entity::instructor::ActiveModel {
            name: ActiveValue::Set(param.name),
            surname: ActiveValue::Set(param.surname),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password),
            name_of_school: ActiveValue::Set(param.name_of_school),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Instructor::from_entity(entity))
    }

    /// Finds an instructor by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Instructor))` - Instructor found
    /// - `Ok(None)` - No instructor with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Instructor>, DbErr> {
        let entity = entity::prelude::Instructor::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Instructor::from_entity))
    }

    /// Checks whether an email already belongs to an instructor.
    ///
    /// # Arguments
    /// - `email` - Address to look up
    /// - `excluding` - Instructor ID to ignore, so an update may keep its own email
    ///
    /// # Returns
    /// - `Ok(true)` - Another instructor uses the email
    /// - `Ok(false)` - Email is free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn email_taken(&self, email: &str, excluding: Option<i32>) -> Result<bool, DbErr> {
        let count = entity::prelude::Instructor::find()
            .filter(entity::instructor::Column::Email.eq(email))
            .apply_if(excluding, |query, id| {
                query.filter(entity::instructor::Column::Id.ne(id))
            })
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every instructor ordered by ID.
    pub async fn find_all(&self) -> Result<Vec<Instructor>, DbErr> {
        let entities = entity::prelude::Instructor::find()
            .order_by_asc(entity::instructor::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Instructor::from_entity).collect())
    }

    /// Overwrites every mutable field of an existing instructor.
    ///
    /// # Returns
    /// - `Ok(Some(Instructor))` - The updated instructor
    /// - `Ok(None)` - No instructor with that ID; nothing was written
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        id: i32,
        param: InstructorParam,
    ) -> Result<Option<Instructor>, DbErr> {
        let Some(entity) = entity::prelude::Instructor::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(param.name);
        active.surname = ActiveValue::Set(param.surname);
        active.email = ActiveValue::Set(param.email);
        active.password = ActiveValue::Set(param.password);
        active.name_of_school = ActiveValue::Set(param.name_of_school);

        let updated = active.update(self.db).await?;

        Ok(Some(Instructor::from_entity(updated)))
    }

    /// Deletes an instructor by ID. Reservations pointing at it are left alone.
    ///
    /// # Returns
    /// - `Ok(true)` - Instructor deleted
    /// - `Ok(false)` - No instructor with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Instructor::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
