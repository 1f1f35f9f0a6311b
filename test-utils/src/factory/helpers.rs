//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to keep generated emails unique so instructor inserts never collide.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a student, an instructor and a reservation linking them.
///
/// # Returns
/// - `Ok((student, instructor, reservation))` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::student::Model,
        entity::instructor::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let student = crate::factory::student::create_student(db).await?;
    let instructor = crate::factory::instructor::create_instructor(db).await?;
    let reservation =
        crate::factory::reservation::create_reservation(db, student.id, instructor.id).await?;

    Ok((student, instructor, reservation))
}
