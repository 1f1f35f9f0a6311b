use sea_orm::entity::prelude::*;

/// A booked driving lesson.
///
/// `student_id` and `instructor_id` are plain columns without foreign keys, so a
/// reservation may outlive the student or instructor it points at.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub is_reserved: bool,
    pub student_id: i32,
    pub instructor_id: i32,
    pub reservation_date: Date,
    pub reservation_time: Time,
    pub reservation_place: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
