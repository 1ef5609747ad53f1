use crate::{application::date_format::time_range, domain::entities::booking::Booking};

pub const REMINDER_SUBJECT: &str = "Today's Booking Reminder";

const GREETING: &str =
    "Dear Students,\n\nThis is a reminder for the following bookings scheduled for today:\n\n";
const SIGN_OFF: &str = "\nBest regards,\nUniversity";

/// Plain text body listing every booking in the order given.
pub fn render_reminder_body(bookings: &[Booking]) -> String {
    let blocks = bookings
        .iter()
        .map(render_booking_block)
        .collect::<Vec<_>>()
        .join("\n");

    format!("{GREETING}{blocks}{SIGN_OFF}")
}

fn render_booking_block(booking: &Booking) -> String {
    format!(
        "Lecture: {}\nDate: {}\nTime: {}\nLocation: {}\n",
        booking.module,
        booking.date,
        time_range(&booking.start_time, &booking.end_time),
        booking.location,
    )
}
