//! Student data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::student::{Student, StudentParam};

/// Repository providing database operations for student management.
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new StudentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new student.
    ///
    /// # Returns
    /// - `Ok(Student)` - The stored student with its assigned ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: StudentParam) -> Result<Student, DbErr> {
        let entity = entity::student::ActiveModel {
            name: ActiveValue::Set(param.name),
            surname: ActiveValue::Set(param.surname),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password),
            name_of_school: ActiveValue::Set(param.name_of_school),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }

    /// Finds a student by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student found
    /// - `Ok(None)` - No student with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Gets every student ordered by ID.
    pub async fn find_all(&self) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Overwrites every mutable field of an existing student.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The updated student
    /// - `Ok(None)` - No student with that ID; nothing was written
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, id: i32, param: StudentParam) -> Result<Option<Student>, DbErr> {
        let Some(entity) = entity::prelude::Student::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(param.name);
        active.surname = ActiveValue::Set(param.surname);
        active.email = ActiveValue::Set(param.email);
        active.password = ActiveValue::Set(param.password);
        active.name_of_school = ActiveValue::Set(param.name_of_school);

        let updated = active.update(self.db).await?;

        Ok(Some(Student::from_entity(updated)))
    }

    /// Deletes a student by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - Student deleted
    /// - `Ok(false)` - No student with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
