pub mod account;
pub mod booking;
pub mod confirmation;
pub mod reminder;
pub mod room;
