use validator::ValidateEmail;

use crate::application::date_format::{
    CLOCK_TIME_FORMAT, ISO_DATE_FORMAT, parse_clock_time, parse_iso_date,
};

/// Validates that the input looks like a valid email address
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.validate_email()
}

/// Booking dates are stored as `YYYY-MM-DD` and compared verbatim, so only
/// the canonical zero-padded form is accepted.
pub fn is_valid_booking_date(date: &str) -> bool {
    parse_iso_date(date).is_some_and(|d| d.format(ISO_DATE_FORMAT).to_string() == date)
}

/// Clock times are `HH:MM`, 24-hour, zero-padded.
pub fn is_valid_clock_time(time: &str) -> bool {
    parse_clock_time(time).is_some_and(|t| t.format(CLOCK_TIME_FORMAT).to_string() == time)
}
