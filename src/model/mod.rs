//! API data transfer objects.
//!
//! Request payloads, response envelopes and the serde helpers they share. Payload
//! types carry their own field validation so the server can report every violation
//! for a request in one response.

pub mod api;
pub mod format;
pub mod instructor;
pub mod reservation;
pub mod student;
pub mod validation;
