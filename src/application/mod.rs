pub mod app_error;
pub mod date_format;
pub mod ports;
pub mod reminder_message;
pub mod use_cases;
pub mod validators;
