//! Resend delivery backend.
//!
//! Posts rendered messages to the Resend email API
//! (<https://resend.com/docs/api-reference/emails/send-email>).

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{DeliveryError, DeliveryReceipt, EmailSender, OutboundEmail};

const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Email sender backed by the Resend HTTP API.
pub struct ResendSender {
    client: reqwest::Client,
    api_key: String,
    from: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

#[derive(Deserialize)]
struct SendResponse {
    id: Option<String>,
}

impl ResendSender {
    pub fn new(api_key: String, from: String, timeout_seconds: u64) -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_key,
            from,
        })
    }
}

#[async_trait]
impl EmailSender for ResendSender {
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryReceipt, DeliveryError> {
        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(&self.api_key)
            .json(&SendRequest {
                from: &self.from,
                to: &email.to,
                subject: &email.subject,
                html: &email.html,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let body: SendResponse = response.json().await?;

        tracing::debug!(
            to = %email.to,
            provider_id = ?body.id,
            "Resend accepted message"
        );

        Ok(DeliveryReceipt {
            provider_id: body.id,
        })
    }
}
