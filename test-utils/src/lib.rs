//! SkillWheel Test Utils
//!
//! Shared testing utilities for the booking backend. Provides a builder for test
//! contexts backed by in-memory SQLite databases, plus factories that insert students,
//! instructors and reservations with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn finds_student() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new()
//!         .with_table(entity::prelude::Student)
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let student = factory::create_student(db).await?;
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
