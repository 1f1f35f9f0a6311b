use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // student_id and instructor_id carry no foreign keys; deleting a student or
        // instructor leaves its reservations in place.
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(boolean(Reservation::IsReserved))
                    .col(integer(Reservation::StudentId))
                    .col(integer(Reservation::InstructorId))
                    .col(date(Reservation::ReservationDate))
                    .col(time(Reservation::ReservationTime))
                    .col(string(Reservation::ReservationPlace))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reservations_student_id")
                    .table(Reservation::Table)
                    .col(Reservation::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reservations_instructor_id")
                    .table(Reservation::Table)
                    .col(Reservation::InstructorId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    #[sea_orm(iden = "reservations")]
    Table,
    Id,
    IsReserved,
    StudentId,
    InstructorId,
    ReservationDate,
    ReservationTime,
    ReservationPlace,
}
