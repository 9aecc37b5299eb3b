use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Telegram API error: {0}")]
    Api(String),
}

/// Delivers plain text to a chat.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), TelegramError>;
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct BotApiResponse {
    ok: bool,
    description: Option<String>,
}

/// Telegram Bot API client
pub struct TelegramClient {
    client: Client,
    send_url: String,
}

impl TelegramClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            send_url: format!(
                "{}/bot{}/sendMessage",
                config.telegram_api_url.trim_end_matches('/'),
                config.telegram_token
            ),
        }
    }
}

#[async_trait]
impl MessageTransport for TelegramClient {
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), TelegramError> {
        let response = self
            .client
            .post(&self.send_url)
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await?;

        let status = response.status();
        // Error bodies are JSON too; fall back to the status line if not.
        let body: Option<BotApiResponse> = response.json().await.ok();

        match body {
            Some(reply) if status.is_success() && reply.ok => Ok(()),
            Some(reply) => Err(TelegramError::Api(
                reply
                    .description
                    .unwrap_or_else(|| format!("request failed with status {}", status)),
            )),
            None => Err(TelegramError::Api(format!(
                "unreadable response with status {}",
                status
            ))),
        }
    }
}
