//! Outbound email delivery.
//!
//! `EmailSender` abstracts the delivery provider so the dispatcher never
//! talks to a concrete transport. Two backends:
//!
//! - `ResendSender`: posts to the Resend HTTP API (production)
//! - `ConsoleSender`: logs the message and succeeds (development / no credential)
//!
//! Use `create_email_sender()` to select the backend from configuration.

mod console;
mod resend;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

pub use console::ConsoleSender;
pub use resend::ResendSender;

use crate::config::EmailConfig;

/// A fully rendered message ready for delivery.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Provider acknowledgement for a single delivery.
#[derive(Debug, Clone, Default)]
pub struct DeliveryReceipt {
    /// Provider-assigned message id, when the backend reports one
    pub provider_id: Option<String>,
}

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("email provider rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("email transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Sends a rendered email through the configured provider.
///
/// Implementations must not retry; a failed send is fatal to the request.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryReceipt, DeliveryError>;
}

/// Create an email sender based on configuration.
///
/// Returns the appropriate backend implementation based on the `backend` setting:
/// - `"resend"`: Returns a `ResendSender` if an API key is configured
/// - `"console"` (default fallback): Returns a `ConsoleSender`
pub fn create_email_sender(config: &EmailConfig) -> Result<Arc<dyn EmailSender>, DeliveryError> {
    match config.backend.as_str() {
        "resend" => {
            if let Some(key) = config.key.as_deref().filter(|k| !k.is_empty()) {
                tracing::info!(backend = "resend", "Creating Resend email sender");
                Ok(Arc::new(ResendSender::new(
                    key.to_string(),
                    config.from.clone(),
                    config.timeout,
                )?))
            } else {
                tracing::warn!(
                    "Resend backend requested but no API key configured, falling back to console"
                );
                Ok(Arc::new(ConsoleSender))
            }
        }
        _ => {
            tracing::info!(backend = "console", "Creating console email sender");
            Ok(Arc::new(ConsoleSender))
        }
    }
}
