//! In-memory fakes for the repository, notification and clock ports.

use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::{
        date_format::{parse_clock_time, parse_iso_date},
        ports::{clock::Clock, notification::NotificationSender},
    },
    domain::entities::{
        booking::{Booking, NewBooking},
        lecturer::Lecturer,
        room::Room,
        student::Student,
    },
    use_cases::{
        account::{LecturerRepo, NewAccount, StudentRepo},
        booking::BookingRepo,
        room::{NewRoom, RoomRepo},
    },
};

fn read_failure() -> AppError {
    AppError::Database("Database operation failed".into())
}

fn duplicate_email() -> AppError {
    AppError::InvalidInput("A record with this value already exists".into())
}

// ============================================================================
// InMemoryBookingRepo
// ============================================================================

/// Keeps bookings in insertion order.
#[derive(Default)]
pub struct InMemoryBookingRepo {
    pub bookings: Mutex<Vec<Booking>>,
    fail_reads: AtomicBool,
}

impl InMemoryBookingRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: Mutex::new(bookings),
            fail_reads: AtomicBool::new(false),
        }
    }

    /// Make every subsequent read return a database error.
    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    fn check_reads(&self) -> AppResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(read_failure());
        }
        Ok(())
    }
}

#[async_trait]
impl BookingRepo for InMemoryBookingRepo {
    async fn create(&self, booking: &NewBooking) -> AppResult<Booking> {
        let booking = Booking {
            id: Uuid::new_v4(),
            lecture_name: booking.lecture_name.clone(),
            department: booking.department.clone(),
            module: booking.module.clone(),
            year: booking.year.clone(),
            date: booking.date.clone(),
            start_time: booking.start_time.clone(),
            end_time: booking.end_time.clone(),
            type_of_booking: booking.type_of_booking.clone(),
            location: booking.location.clone(),
            booked_email: booking.booked_email.clone(),
            created_at: Some(Utc::now().naive_utc()),
        };
        self.bookings.lock().unwrap().push(booking.clone());
        Ok(booking)
    }

    async fn list_all(&self) -> AppResult<Vec<Booking>> {
        self.check_reads()?;
        Ok(self.bookings.lock().unwrap().clone())
    }

    async fn list_by_date(&self, date: &str) -> AppResult<Vec<Booking>> {
        self.check_reads()?;
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.date == date)
            .cloned()
            .collect())
    }
}

// ============================================================================
// InMemoryStudentRepo / InMemoryLecturerRepo
// ============================================================================

#[derive(Default)]
pub struct InMemoryStudentRepo {
    pub students: Mutex<Vec<Student>>,
    fail_reads: AtomicBool,
}

impl InMemoryStudentRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            students: Mutex::new(students),
            fail_reads: AtomicBool::new(false),
        }
    }

    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl StudentRepo for InMemoryStudentRepo {
    async fn create(&self, account: &NewAccount) -> AppResult<Student> {
        let mut students = self.students.lock().unwrap();
        if students.iter().any(|s| s.email == account.email) {
            return Err(duplicate_email());
        }
        let student = Student {
            id: Uuid::new_v4(),
            name: account.name.clone(),
            email: account.email.clone(),
            password: account.password.clone(),
            created_at: Some(Utc::now().naive_utc()),
        };
        students.push(student.clone());
        Ok(student)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Student>> {
        Ok(self
            .students
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.email == email)
            .cloned())
    }

    async fn list_all(&self) -> AppResult<Vec<Student>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(read_failure());
        }
        Ok(self.students.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct InMemoryLecturerRepo {
    pub lecturers: Mutex<Vec<Lecturer>>,
}

impl InMemoryLecturerRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lecturers(lecturers: Vec<Lecturer>) -> Self {
        Self {
            lecturers: Mutex::new(lecturers),
        }
    }
}

#[async_trait]
impl LecturerRepo for InMemoryLecturerRepo {
    async fn create(&self, account: &NewAccount) -> AppResult<Lecturer> {
        let mut lecturers = self.lecturers.lock().unwrap();
        if lecturers.iter().any(|l| l.email == account.email) {
            return Err(duplicate_email());
        }
        let lecturer = Lecturer {
            id: Uuid::new_v4(),
            name: account.name.clone(),
            email: account.email.clone(),
            password: account.password.clone(),
            created_at: Some(Utc::now().naive_utc()),
        };
        lecturers.push(lecturer.clone());
        Ok(lecturer)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Lecturer>> {
        Ok(self
            .lecturers
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.email == email)
            .cloned())
    }

    async fn list_all(&self) -> AppResult<Vec<Lecturer>> {
        Ok(self.lecturers.lock().unwrap().clone())
    }
}

// ============================================================================
// InMemoryRoomRepo
// ============================================================================

#[derive(Default)]
pub struct InMemoryRoomRepo {
    pub rooms: Mutex<Vec<Room>>,
}

impl InMemoryRoomRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomRepo for InMemoryRoomRepo {
    async fn create(&self, room: &NewRoom) -> AppResult<Room> {
        let room = Room {
            id: Uuid::new_v4(),
            name: room.name.clone(),
            location: room.location.clone(),
            capacity: room.capacity,
            created_at: Some(Utc::now().naive_utc()),
        };
        self.rooms.lock().unwrap().push(room.clone());
        Ok(room)
    }

    async fn list_all(&self) -> AppResult<Vec<Room>> {
        Ok(self.rooms.lock().unwrap().clone())
    }
}

// ============================================================================
// Notification senders
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
}

/// Records delivered messages. Can be switched into a failing mode where
/// every attempt is counted but nothing is delivered.
#[derive(Default)]
pub struct RecordingNotificationSender {
    sent: Mutex<Vec<SentEmail>>,
    attempts: AtomicUsize,
    failing: AtomicBool,
}

impl RecordingNotificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let sender = Self::default();
        sender.set_failing(true);
        sender
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Successfully delivered messages.
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of `send` calls, failed ones included.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotificationSender for RecordingNotificationSender {
    async fn send(&self, from: &str, to: &[String], subject: &str, text: &str) -> AppResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::EmailDelivery("provider unavailable".into()));
        }
        self.sent.lock().unwrap().push(SentEmail {
            from: from.to_string(),
            to: to.to_vec(),
            subject: subject.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }
}

/// Never completes.
pub struct HangingNotificationSender;

#[async_trait]
impl NotificationSender for HangingNotificationSender {
    async fn send(&self, _from: &str, _to: &[String], _subject: &str, _text: &str) -> AppResult<()> {
        std::future::pending().await
    }
}

// ============================================================================
// FakeClock
// ============================================================================

pub struct FakeClock {
    now: Mutex<NaiveDateTime>,
}

impl FakeClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// `date` as `YYYY-MM-DD`, `time` as `HH:MM`.
    pub fn at(date: &str, time: &str) -> Self {
        Self::new(NaiveDateTime::new(
            parse_iso_date(date).expect("valid test date"),
            parse_clock_time(time).expect("valid test time"),
        ))
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock().unwrap() = now;
    }
}

impl Clock for FakeClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap()
    }
}
