pub mod clock;
pub mod notification;
