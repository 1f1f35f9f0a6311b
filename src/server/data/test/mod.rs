mod instructor;
mod reservation;
mod student;
