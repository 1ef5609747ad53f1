use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::notification::NotificationSender,
};

/// Plain text mail through the Resend HTTP API.
#[derive(Clone)]
pub struct ResendEmailSender {
    client: Client,
    api_key: SecretString,
    endpoint: Url,
}

impl ResendEmailSender {
    pub fn new(api_key: SecretString, api_base: &Url) -> AppResult<Self> {
        let endpoint = api_base
            .join("emails")
            .map_err(|e| AppError::Internal(format!("invalid email API url: {e}")))?;
        Ok(Self {
            client: Client::new(),
            api_key,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[derive(Serialize)]
struct ResendReq<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    text: &'a str,
}

#[async_trait]
impl NotificationSender for ResendEmailSender {
    async fn send(&self, from: &str, to: &[String], subject: &str, text: &str) -> AppResult<()> {
        debug!(recipients = to.len(), subject, "Sending email");
        let body = ResendReq {
            from,
            to,
            subject,
            text,
        };
        self.client
            .post(self.endpoint.clone())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::EmailDelivery(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::EmailDelivery(e.to_string()))?;
        Ok(())
    }
}
