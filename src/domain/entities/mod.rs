pub mod booking;
pub mod lecturer;
pub mod room;
pub mod student;
