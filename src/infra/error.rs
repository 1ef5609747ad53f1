use thiserror::Error;

use crate::infra::cron::CronError;

/// Infrastructure errors that can occur during application startup.
///
/// Display messages are safe for logs. Debug output includes the full
/// #[source] chain which may contain the connection string, so log with
/// Display (%e) rather than Debug (?e).
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Database connection failed. Check DATABASE_URL and ensure the database is running.")]
    DatabaseConnection(#[source] sqlx::Error),

    #[error("Database migration failed")]
    Migration(#[source] sqlx::migrate::MigrateError),

    #[error("Invalid REMINDER_SCHEDULE")]
    Schedule(#[source] CronError),

    #[error("Email sender setup failed: {0}")]
    EmailSender(String),
}
