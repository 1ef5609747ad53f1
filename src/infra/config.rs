use std::{net::SocketAddr, time::Duration};

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use url::Url;

pub const DEFAULT_REMINDER_SCHEDULE: &str = "0 6,9 * * *";

pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    pub resend_api_key: SecretString,
    pub resend_api_url: Url,
    /// Sender identity for every outgoing email.
    pub email_from: String,
    /// Five-field cron expression, evaluated in server-local time.
    pub reminder_schedule: String,
    /// Upper bound on each store query and on the send inside a reminder run.
    pub reminder_call_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url: String = get_env("DATABASE_URL");
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:5000".parse().unwrap());
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");

        let resend_api_key = SecretString::new(get_env::<String>("RESEND_API_KEY").into());
        let resend_api_url: Url = get_env_default(
            "RESEND_API_URL",
            "https://api.resend.com".parse().unwrap(),
        );
        let email_from: String = get_env("EMAIL_FROM");

        let reminder_schedule: String =
            get_env_default("REMINDER_SCHEDULE", DEFAULT_REMINDER_SCHEDULE.to_string());
        let reminder_call_timeout_secs: u64 = get_env_default("REMINDER_CALL_TIMEOUT_SECS", 30);

        Self {
            database_url,
            bind_addr,
            cors_origin,
            resend_api_key,
            resend_api_url,
            email_from,
            reminder_schedule,
            reminder_call_timeout: Duration::from_secs(reminder_call_timeout_secs),
        }
    }
}
