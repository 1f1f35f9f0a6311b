use crate::server::{data::instructor::InstructorRepository, model::instructor::InstructorParam};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod email_taken;
mod find_all;
mod update;

fn param(email: &str) -> InstructorParam {
    InstructorParam {
        name: "Anna".to_string(),
        surname: "Nowak".to_string(),
        email: email.to_string(),
        password: "password123".to_string(),
        name_of_school: Some("AutoSzkola ABC".to_string()),
    }
}
