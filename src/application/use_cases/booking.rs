use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::{is_valid_booking_date, is_valid_clock_time},
    domain::entities::booking::{Booking, NewBooking},
};

#[async_trait]
pub trait BookingRepo: Send + Sync {
    async fn create(&self, booking: &NewBooking) -> AppResult<Booking>;
    async fn list_all(&self) -> AppResult<Vec<Booking>>;
    /// Bookings whose stored date equals `date` exactly, in insertion order.
    async fn list_by_date(&self, date: &str) -> AppResult<Vec<Booking>>;
}

#[derive(Clone)]
pub struct BookingUseCases {
    repo: Arc<dyn BookingRepo>,
}

impl BookingUseCases {
    pub fn new(repo: Arc<dyn BookingRepo>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, booking), fields(module = %booking.module, date = %booking.date))]
    pub async fn create(&self, booking: NewBooking) -> AppResult<Booking> {
        if !is_valid_booking_date(&booking.date) {
            return Err(AppError::InvalidInput(
                "Invalid date. Expected YYYY-MM-DD.".into(),
            ));
        }
        if !is_valid_clock_time(&booking.start_time) || !is_valid_clock_time(&booking.end_time) {
            return Err(AppError::InvalidInput(
                "Invalid time. Expected HH:MM.".into(),
            ));
        }
        self.repo.create(&booking).await
    }

    pub async fn list(&self) -> AppResult<Vec<Booking>> {
        self.repo.list_all().await
    }
}
