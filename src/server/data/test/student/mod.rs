use crate::server::{data::student::StudentRepository, model::student::StudentParam};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_all;
mod find_by_id;
mod update;

fn param(name: &str, email: &str) -> StudentParam {
    StudentParam {
        name: name.to_string(),
        surname: "Kowalski".to_string(),
        email: email.to_string(),
        password: "password123".to_string(),
        name_of_school: None,
    }
}
