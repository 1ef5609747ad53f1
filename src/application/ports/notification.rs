use async_trait::async_trait;

use crate::app_error::AppResult;

/// Outbound email delivery.
///
/// One call is one message: every address in `to` goes on the same envelope.
/// Delivery status is all-or-nothing, there is no per-recipient result.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, from: &str, to: &[String], subject: &str, text: &str) -> AppResult<()>;
}
