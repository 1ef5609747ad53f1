//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::domain::entities::{
    booking::{Booking, NewBooking},
    lecturer::Lecturer,
    student::Student,
};

/// Create a test booking with sensible defaults.
pub fn create_test_booking(overrides: impl FnOnce(&mut Booking)) -> Booking {
    let mut booking = Booking {
        id: Uuid::new_v4(),
        lecture_name: "Dr. Hopper".to_string(),
        department: "Computing".to_string(),
        module: "CS101".to_string(),
        year: "1".to_string(),
        date: "2024-06-01".to_string(),
        start_time: "09:00".to_string(),
        end_time: "10:00".to_string(),
        type_of_booking: "Lecture".to_string(),
        location: "Room A".to_string(),
        booked_email: "hopper@uni.test".to_string(),
        created_at: Some(test_datetime()),
    };
    overrides(&mut booking);
    booking
}

/// Create a booking request with sensible defaults.
pub fn new_test_booking(overrides: impl FnOnce(&mut NewBooking)) -> NewBooking {
    let mut booking = NewBooking {
        lecture_name: "Dr. Hopper".to_string(),
        department: "Computing".to_string(),
        module: "CS101".to_string(),
        year: "1".to_string(),
        date: "2024-06-01".to_string(),
        start_time: "09:00".to_string(),
        end_time: "10:00".to_string(),
        type_of_booking: "Lecture".to_string(),
        location: "Room A".to_string(),
        booked_email: "hopper@uni.test".to_string(),
    };
    overrides(&mut booking);
    booking
}

/// Create a test student with a unique email.
pub fn create_test_student(overrides: impl FnOnce(&mut Student)) -> Student {
    let id = Uuid::new_v4();
    let mut student = Student {
        id,
        name: "Test Student".to_string(),
        email: format!("student-{}@uni.test", id.simple()),
        password: "password".to_string(),
        created_at: Some(test_datetime()),
    };
    overrides(&mut student);
    student
}

/// Create a test lecturer with a unique email.
pub fn create_test_lecturer(overrides: impl FnOnce(&mut Lecturer)) -> Lecturer {
    let id = Uuid::new_v4();
    let mut lecturer = Lecturer {
        id,
        name: "Test Lecturer".to_string(),
        email: format!("lecturer-{}@uni.test", id.simple()),
        password: "password".to_string(),
        created_at: Some(test_datetime()),
    };
    overrides(&mut lecturer);
    lecturer
}

/// A fixed timestamp for deterministic tests.
pub fn test_datetime() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}
