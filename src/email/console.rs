//! Console delivery backend.
//!
//! Logs the message instead of sending it. Used in development and when no
//! provider credential is configured.

use async_trait::async_trait;

use super::{DeliveryError, DeliveryReceipt, EmailSender, OutboundEmail};

/// Email sender that only logs.
#[derive(Debug, Clone)]
pub struct ConsoleSender;

#[async_trait]
impl EmailSender for ConsoleSender {
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryReceipt, DeliveryError> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            html_bytes = email.html.len(),
            "Console backend: not sending email"
        );
        Ok(DeliveryReceipt::default())
    }
}
