//! SeaORM entity models for the booking database.
//!
//! One module per table. Reservations reference students and instructors by id only;
//! no relation is declared between them.

pub mod prelude;

pub mod instructor;
pub mod reservation;
pub mod student;
