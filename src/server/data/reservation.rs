//! Reservation data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::reservation::{
    CreateReservationParam, Reservation, ReservationChange,
};

/// Repository providing database operations for reservations.
pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    /// Creates a new ReservationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new reservation.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The stored reservation with its assigned ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateReservationParam) -> Result<Reservation, DbErr> {
        let entity = entity::reservation::ActiveModel {
            is_reserved: ActiveValue::Set(param.is_reserved),
            student_id: ActiveValue::Set(param.student_id),
            instructor_id: ActiveValue::Set(param.instructor_id),
            reservation_date: ActiveValue::Set(param.date),
            reservation_time: ActiveValue::Set(param.time),
            reservation_place: ActiveValue::Set(param.place),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reservation::from_entity(entity))
    }

    /// Finds a reservation by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - Reservation found
    /// - `Ok(None)` - No reservation with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let entity = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Reservation::from_entity))
    }

    /// Gets every reservation ordered by ID.
    pub async fn find_all(&self) -> Result<Vec<Reservation>, DbErr> {
        self.find_where(Condition::all()).await
    }

    /// Gets the reservations of one student ordered by ID.
    ///
    /// An unknown student simply has no reservations.
    pub async fn find_by_student_id(&self, student_id: i32) -> Result<Vec<Reservation>, DbErr> {
        self.find_where(Condition::all().add(entity::reservation::Column::StudentId.eq(student_id)))
            .await
    }

    /// Gets the reservations of one instructor ordered by ID.
    pub async fn find_by_instructor_id(
        &self,
        instructor_id: i32,
    ) -> Result<Vec<Reservation>, DbErr> {
        self.find_where(
            Condition::all().add(entity::reservation::Column::InstructorId.eq(instructor_id)),
        )
        .await
    }

    async fn find_where(&self, condition: Condition) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(condition)
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Changes exactly one field of an existing reservation.
    ///
    /// Only the changed column is written.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - The reservation after the change
    /// - `Ok(None)` - No reservation with that ID; nothing was written
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update_field(
        &self,
        id: i32,
        change: ReservationChange,
    ) -> Result<Option<Reservation>, DbErr> {
        let Some(entity) = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        match change {
            ReservationChange::Time(time) => active.reservation_time = ActiveValue::Set(time),
            ReservationChange::Date(date) => active.reservation_date = ActiveValue::Set(date),
            ReservationChange::Instructor(id) => active.instructor_id = ActiveValue::Set(id),
            ReservationChange::Student(id) => active.student_id = ActiveValue::Set(id),
            ReservationChange::Place(place) => active.reservation_place = ActiveValue::Set(place),
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Reservation::from_entity(updated)))
    }

    /// Deletes a reservation by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - Reservation deleted
    /// - `Ok(false)` - No reservation with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Reservation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
