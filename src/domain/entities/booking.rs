use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

/// A room or lecture booking.
///
/// `date` is kept in its stored `YYYY-MM-DD` form and is matched against the
/// reminder day by exact string comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub lecture_name: String,
    pub department: String,
    pub module: String,
    pub year: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub type_of_booking: String,
    pub location: String,
    pub booked_email: String,
    pub created_at: Option<NaiveDateTime>,
}

/// Fields supplied by the client when creating a booking.
#[derive(Debug, Clone, Default)]
pub struct NewBooking {
    pub lecture_name: String,
    pub department: String,
    pub module: String,
    pub year: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub type_of_booking: String,
    pub location: String,
    pub booked_email: String,
}
