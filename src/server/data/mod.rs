//! Database repository layer.
//!
//! One repository per entity. Repositories use SeaORM entity models internally and
//! return domain models, keeping the rest of the server unaware of the schema.

pub mod instructor;
pub mod reservation;
pub mod student;

#[cfg(test)]
mod test;
