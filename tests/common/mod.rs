//! Shared test fixtures: a recording fake sender and app construction.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;

use toy_library_email_service::config::Settings;
use toy_library_email_service::email::{
    DeliveryError, DeliveryReceipt, EmailSender, OutboundEmail,
};
use toy_library_email_service::notification::{NotificationDispatcher, TemplateConfig};
use toy_library_email_service::server::{create_app, AppState};

/// Fake sender that records deliveries; can fail every send, or only the
/// sends after the first `n` successes.
#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<OutboundEmail>>,
    fail_from: Option<usize>,
}

impl RecordingSender {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_from: Some(0),
        }
    }

    /// Succeed for the first `n` sends, fail every send after that.
    pub fn failing_after(n: usize) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_from: Some(n),
        }
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailSender for RecordingSender {
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryReceipt, DeliveryError> {
        let mut sent = self.sent.lock().unwrap();
        if self.fail_from.is_some_and(|n| sent.len() >= n) {
            return Err(DeliveryError::Rejected {
                status: 422,
                body: "invalid recipient".to_string(),
            });
        }
        sent.push(email.clone());
        Ok(DeliveryReceipt::default())
    }
}

/// Build a test server wired to the given fake sender.
pub fn test_server(sender: Arc<RecordingSender>, admin_address: Option<&str>) -> TestServer {
    let dispatcher = Arc::new(NotificationDispatcher::new(
        sender,
        TemplateConfig::default(),
        admin_address.map(str::to_string),
    ));

    let state = AppState {
        settings: Arc::new(Settings::default()),
        dispatcher,
    };

    TestServer::new(create_app(state)).unwrap()
}
