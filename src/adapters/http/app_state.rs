use std::sync::Arc;

use crate::{
    infra::config::AppConfig,
    use_cases::{
        account::AccountUseCases, booking::BookingUseCases, confirmation::ConfirmationUseCases,
        room::RoomUseCases,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub account_use_cases: Arc<AccountUseCases>,
    pub booking_use_cases: Arc<BookingUseCases>,
    pub room_use_cases: Arc<RoomUseCases>,
    pub confirmation_use_cases: Arc<ConfirmationUseCases>,
}
