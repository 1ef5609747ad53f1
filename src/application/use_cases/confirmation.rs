use std::sync::Arc;

use tracing::{error, instrument};

use crate::{
    app_error::{AppError, AppResult},
    application::{ports::notification::NotificationSender, validators::is_valid_email},
};

pub const CONFIRMATION_SUBJECT: &str = "Your Confirmation Code";

#[derive(Clone)]
pub struct ConfirmationUseCases {
    sender: Arc<dyn NotificationSender>,
    email_from: String,
}

impl ConfirmationUseCases {
    pub fn new(sender: Arc<dyn NotificationSender>, email_from: String) -> Self {
        Self { sender, email_from }
    }

    /// Mails a registration confirmation code chosen by the client.
    #[instrument(skip(self, code))]
    pub async fn send_code(&self, email: &str, code: &str) -> AppResult<()> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(AppError::InvalidInput("Invalid email address".into()));
        }
        if code.trim().is_empty() {
            return Err(AppError::InvalidInput("Confirmation code is required".into()));
        }

        self.sender
            .send(
                &self.email_from,
                &[email.to_string()],
                CONFIRMATION_SUBJECT,
                &confirmation_body(code),
            )
            .await
            .inspect_err(|err| error!(error = %err, "Error sending confirmation code"))
    }
}

fn confirmation_body(code: &str) -> String {
    format!(
        "Hello,\n\nYour confirmation code is: **{code}**\n\n\
         Please enter this code to complete your registration.\n\nThank you!"
    )
}
