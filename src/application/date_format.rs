//! Calendar and clock-time helpers shared by booking validation and the
//! reminder pipeline. Dates travel as `YYYY-MM-DD` strings and times as
//! `HH:MM` strings; these helpers are the only place that format is spelled.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
pub const CLOCK_TIME_FORMAT: &str = "%H:%M";

/// The calendar day of `now` in the form bookings are stored with.
pub fn iso_date(now: NaiveDateTime) -> String {
    now.date().format(ISO_DATE_FORMAT).to_string()
}

pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT).ok()
}

pub fn parse_clock_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, CLOCK_TIME_FORMAT).ok()
}

/// Renders a booking slot as `start to end`, leaving both ends verbatim.
pub fn time_range(start: &str, end: &str) -> String {
    format!("{start} to {end}")
}
