use crate::{
    adapters::{email::resend::ResendEmailSender, http::app_state::AppState},
    application::ports::{clock::Clock, notification::NotificationSender},
    infra::{
        clock::SystemClock, config::AppConfig, cron::CronSchedule, error::InfraError,
        postgres_persistence, reminder_scheduler::ReminderScheduler,
    },
    use_cases::{
        account::{AccountUseCases, LecturerRepo, StudentRepo},
        booking::{BookingRepo, BookingUseCases},
        confirmation::ConfirmationUseCases,
        reminder::ReminderJob,
        room::{RoomRepo, RoomUseCases},
    },
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub struct AppParts {
    pub state: AppState,
    pub scheduler: ReminderScheduler,
}

pub async fn init_app() -> Result<AppParts, InfraError> {
    let config = AppConfig::from_env();

    let schedule = CronSchedule::parse(&config.reminder_schedule).map_err(InfraError::Schedule)?;

    let postgres_arc = Arc::new(postgres_persistence(&config.database_url).await?);

    let email: Arc<dyn NotificationSender> = Arc::new(
        ResendEmailSender::new(config.resend_api_key.clone(), &config.resend_api_url)
            .map_err(|e| InfraError::EmailSender(e.to_string()))?,
    );
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let booking_repo_arc = postgres_arc.clone() as Arc<dyn BookingRepo>;
    let student_repo_arc = postgres_arc.clone() as Arc<dyn StudentRepo>;
    let lecturer_repo_arc = postgres_arc.clone() as Arc<dyn LecturerRepo>;
    let room_repo_arc = postgres_arc.clone() as Arc<dyn RoomRepo>;

    let reminder_job = ReminderJob::new(
        booking_repo_arc.clone(),
        student_repo_arc.clone(),
        email.clone(),
        clock.clone(),
        config.email_from.clone(),
        config.reminder_call_timeout,
    );
    let scheduler = ReminderScheduler::new(Arc::new(reminder_job), schedule, clock);

    let state = AppState {
        account_use_cases: Arc::new(AccountUseCases::new(student_repo_arc, lecturer_repo_arc)),
        booking_use_cases: Arc::new(BookingUseCases::new(booking_repo_arc)),
        room_use_cases: Arc::new(RoomUseCases::new(room_repo_arc)),
        confirmation_use_cases: Arc::new(ConfirmationUseCases::new(
            email,
            config.email_from.clone(),
        )),
        config: Arc::new(config),
    };

    Ok(AppParts { state, scheduler })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "reserve_master=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs)
    let file = File::create("app.log").expect("cannot create log file");
    let json_layer = fmt::layer()
        .json()
        .with_writer(file)
        .with_current_span(true)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
