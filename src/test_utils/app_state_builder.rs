//! Test app state builder for HTTP-level testing.
//!
//! `TestAppStateBuilder` creates an `AppState` wired to in-memory fakes and
//! hands back the fakes so tests can seed and inspect them.

use std::{sync::Arc, time::Duration};

use axum::http::HeaderValue;
use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    domain::entities::{booking::Booking, lecturer::Lecturer, student::Student},
    infra::config::{AppConfig, DEFAULT_REMINDER_SCHEDULE},
    test_utils::{
        InMemoryBookingRepo, InMemoryLecturerRepo, InMemoryRoomRepo, InMemoryStudentRepo,
        RecordingNotificationSender,
    },
    use_cases::{
        account::AccountUseCases, booking::BookingUseCases, confirmation::ConfirmationUseCases,
        room::RoomUseCases,
    },
};

pub const TEST_EMAIL_FROM: &str = "noreply@uni.test";

/// Handles to the fakes behind a test `AppState`.
pub struct TestFakes {
    pub bookings: Arc<InMemoryBookingRepo>,
    pub students: Arc<InMemoryStudentRepo>,
    pub lecturers: Arc<InMemoryLecturerRepo>,
    pub rooms: Arc<InMemoryRoomRepo>,
    pub sender: Arc<RecordingNotificationSender>,
}

#[derive(Default)]
pub struct TestAppStateBuilder {
    bookings: Vec<Booking>,
    students: Vec<Student>,
    lecturers: Vec<Lecturer>,
    failing_sender: bool,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_booking(mut self, booking: Booking) -> Self {
        self.bookings.push(booking);
        self
    }

    pub fn with_student(mut self, student: Student) -> Self {
        self.students.push(student);
        self
    }

    pub fn with_lecturer(mut self, lecturer: Lecturer) -> Self {
        self.lecturers.push(lecturer);
        self
    }

    pub fn with_failing_sender(mut self) -> Self {
        self.failing_sender = true;
        self
    }

    pub fn build(self) -> (AppState, TestFakes) {
        let fakes = TestFakes {
            bookings: Arc::new(InMemoryBookingRepo::with_bookings(self.bookings)),
            students: Arc::new(InMemoryStudentRepo::with_students(self.students)),
            lecturers: Arc::new(InMemoryLecturerRepo::with_lecturers(self.lecturers)),
            rooms: Arc::new(InMemoryRoomRepo::new()),
            sender: Arc::new(if self.failing_sender {
                RecordingNotificationSender::failing()
            } else {
                RecordingNotificationSender::new()
            }),
        };

        let state = AppState {
            config: Arc::new(test_config()),
            account_use_cases: Arc::new(AccountUseCases::new(
                fakes.students.clone(),
                fakes.lecturers.clone(),
            )),
            booking_use_cases: Arc::new(BookingUseCases::new(fakes.bookings.clone())),
            room_use_cases: Arc::new(RoomUseCases::new(fakes.rooms.clone())),
            confirmation_use_cases: Arc::new(ConfirmationUseCases::new(
                fakes.sender.clone(),
                TEST_EMAIL_FROM.to_string(),
            )),
        };

        (state, fakes)
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "postgres://localhost/unused".to_string(),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        resend_api_key: SecretString::new("re_test".into()),
        resend_api_url: "https://api.resend.com".parse().unwrap(),
        email_from: TEST_EMAIL_FROM.to_string(),
        reminder_schedule: DEFAULT_REMINDER_SCHEDULE.to_string(),
        reminder_call_timeout: Duration::from_secs(5),
    }
}
