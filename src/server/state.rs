use std::sync::Arc;

use crate::config::Settings;
use crate::email::create_email_sender;
use crate::notification::{NotificationDispatcher, TemplateConfig};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub dispatcher: Arc<NotificationDispatcher>,
}

impl AppState {
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let sender = create_email_sender(&settings.email)?;
        let dispatcher = Arc::new(NotificationDispatcher::new(
            sender,
            TemplateConfig::default(),
            settings.email.admin.clone(),
        ));

        Ok(Self {
            settings: Arc::new(settings),
            dispatcher,
        })
    }
}
