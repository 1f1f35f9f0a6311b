use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Instructor::Table)
                    .if_not_exists()
                    .col(pk_auto(Instructor::Id))
                    .col(string_len(Instructor::Name, 50))
                    .col(string_len(Instructor::Surname, 50))
                    .col(string_uniq(Instructor::Email))
                    .col(string(Instructor::Password))
                    .col(string_len_null(Instructor::NameOfSchool, 100))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Instructor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Instructor {
    #[sea_orm(iden = "instructors")]
    Table,
    Id,
    Name,
    Surname,
    Email,
    Password,
    NameOfSchool,
}
