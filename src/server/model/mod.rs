//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! into DTOs at the controller boundary. Parameter types only exist once a payload
//! has passed validation, so services and repositories never see invalid input.

pub mod instructor;
pub mod reservation;
pub mod student;
