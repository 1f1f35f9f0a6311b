//! Business logic layer.
//!
//! Services sit between controllers and repositories. They turn missing rows into
//! `AppError::NotFound`, enforce cross-row rules such as unique instructor emails,
//! and log state changes.

pub mod instructor;
pub mod reservation;
pub mod student;
