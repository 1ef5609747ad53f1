//! Same-day booking reminders.
//!
//! A run reads the bookings dated today, and when there are any, sends one
//! email listing all of them to every registered student. Runs are
//! unattended: every failure ends the current run, is logged, and is handed
//! back as a [`ReminderOutcome`] instead of being raised.

use std::{future::Future, sync::Arc, time::Duration};

use thiserror::Error;
use tracing::{error, info, instrument};

use crate::{
    app_error::AppError,
    application::{
        date_format::iso_date,
        ports::{clock::Clock, notification::NotificationSender},
        reminder_message::{REMINDER_SUBJECT, render_reminder_body},
    },
    domain::entities::{booking::Booking, student::Student},
    use_cases::{account::StudentRepo, booking::BookingRepo},
};

#[derive(Error, Debug)]
pub enum ReminderError {
    #[error("Reading {step} failed: {source}")]
    Store {
        step: &'static str,
        #[source]
        source: AppError,
    },

    #[error("Sending reminder failed: {0}")]
    Send(#[source] AppError),

    #[error("{step} timed out after {after:?}")]
    Timeout { step: &'static str, after: Duration },
}

/// How a single run ended.
#[derive(Debug)]
pub enum ReminderOutcome {
    Sent { bookings: usize, recipients: usize },
    NoBookings,
    Failed(ReminderError),
}

impl ReminderOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, ReminderOutcome::Sent { .. })
    }
}

/// Everything one run sends. Built fresh per run and dropped afterwards.
#[derive(Debug, Clone)]
pub struct ReminderBatch {
    pub date: String,
    pub bookings: Vec<Booking>,
    pub recipients: Vec<String>,
    pub body: String,
}

impl ReminderBatch {
    /// Every student is a recipient, whoever made the booking. Addresses are
    /// kept as listed, duplicates included.
    pub fn new(date: String, bookings: Vec<Booking>, students: &[Student]) -> Self {
        let recipients = students.iter().map(|s| s.email.clone()).collect();
        let body = render_reminder_body(&bookings);
        Self {
            date,
            bookings,
            recipients,
            body,
        }
    }
}

#[derive(Clone)]
pub struct ReminderJob {
    bookings: Arc<dyn BookingRepo>,
    students: Arc<dyn StudentRepo>,
    sender: Arc<dyn NotificationSender>,
    clock: Arc<dyn Clock>,
    email_from: String,
    call_timeout: Duration,
}

impl ReminderJob {
    pub fn new(
        bookings: Arc<dyn BookingRepo>,
        students: Arc<dyn StudentRepo>,
        sender: Arc<dyn NotificationSender>,
        clock: Arc<dyn Clock>,
        email_from: String,
        call_timeout: Duration,
    ) -> Self {
        Self {
            bookings,
            students,
            sender,
            clock,
            email_from,
            call_timeout,
        }
    }

    #[instrument(skip(self))]
    pub async fn run(&self) -> ReminderOutcome {
        match self.try_run().await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(error = %err, "Reminder run failed");
                ReminderOutcome::Failed(err)
            }
        }
    }

    async fn try_run(&self) -> Result<ReminderOutcome, ReminderError> {
        let today = iso_date(self.clock.now());

        let bookings = self
            .bounded("bookings query", self.bookings.list_by_date(&today))
            .await?
            .map_err(|source| ReminderError::Store {
                step: "bookings",
                source,
            })?;

        if bookings.is_empty() {
            info!(date = %today, "No bookings for today");
            return Ok(ReminderOutcome::NoBookings);
        }

        let students = self
            .bounded("students query", self.students.list_all())
            .await?
            .map_err(|source| ReminderError::Store {
                step: "students",
                source,
            })?;

        let batch = ReminderBatch::new(today, bookings, &students);

        self.bounded(
            "reminder send",
            self.sender.send(
                &self.email_from,
                &batch.recipients,
                REMINDER_SUBJECT,
                &batch.body,
            ),
        )
        .await?
        .map_err(ReminderError::Send)?;

        info!(
            date = %batch.date,
            bookings = batch.bookings.len(),
            recipients = batch.recipients.len(),
            "Reminder sent for today's bookings"
        );

        Ok(ReminderOutcome::Sent {
            bookings: batch.bookings.len(),
            recipients: batch.recipients.len(),
        })
    }

    async fn bounded<T>(
        &self,
        step: &'static str,
        fut: impl Future<Output = T>,
    ) -> Result<T, ReminderError> {
        tokio::time::timeout(self.call_timeout, fut)
            .await
            .map_err(|_| ReminderError::Timeout {
                step,
                after: self.call_timeout,
            })
    }
}
