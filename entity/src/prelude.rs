pub use super::instructor::Entity as Instructor;
pub use super::reservation::Entity as Reservation;
pub use super::student::Entity as Student;
