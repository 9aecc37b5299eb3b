use std::sync::Arc;

use crate::config::Config;
use crate::services::telegram::MessageTransport;

/// Best-effort delivery of bot messages to the configured chat.
/// Delivery failures are logged and dropped; callers never see them.
#[derive(Clone)]
pub struct Notifier {
    transport: Arc<dyn MessageTransport>,
    chat_id: String,
}

impl Notifier {
    pub fn new(transport: Arc<dyn MessageTransport>, config: &Config) -> Self {
        Self {
            transport,
            chat_id: config.telegram_chat_id.clone(),
        }
    }

    pub async fn deliver(&self, message: &str) {
        tracing::debug!("Sending Telegram message");
        match self.transport.send(&self.chat_id, message).await {
            Ok(()) => tracing::debug!("Telegram message sent"),
            Err(e) => tracing::error!("Failed to send Telegram message: {}", e),
        }
    }
}
