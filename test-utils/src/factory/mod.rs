//! Factory methods for creating test data.
//!
//! Each entity has a `*Factory` builder for customization and a `create_*` shorthand
//! for quick default creation. Factories insert directly through the entity models,
//! bypassing repositories and validation, so tests can also seed data the API would
//! reject (for example reservations dated in the past).
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let student = factory::create_student(&db).await?;
//! let instructor = factory::instructor::InstructorFactory::new(&db)
//!     .email("taken@example.com")
//!     .build()
//!     .await?;
//! let reservation = factory::create_reservation(&db, student.id, instructor.id).await?;
//! ```

pub mod helpers;
pub mod instructor;
pub mod reservation;
pub mod student;

pub use instructor::create_instructor;
pub use reservation::create_reservation;
pub use student::create_student;
