use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::config::Config;
use crate::services::monitor::types::{fault_message, BotError, PollOutcome};
use crate::services::practicum::{check_response, parse_status, HomeworkApi};
use crate::services::telegram::Notifier;

/// HTTP statuses whose bodies are worth reading. 400 and 401 carry the
/// `code` payload that `check_response` turns into a typed error.
const ACCEPTED_STATUSES: [u16; 3] = [200, 400, 401];

/// Polls the homework API on a fixed period and reports status changes.
pub struct MonitorEngine {
    api: Arc<dyn HomeworkApi>,
    notifier: Notifier,
    retry_period: Duration,
    cursor: i64,
}

impl MonitorEngine {
    pub fn new(api: Arc<dyn HomeworkApi>, notifier: Notifier, config: &Config) -> Self {
        Self {
            api,
            notifier,
            retry_period: config.retry_period,
            cursor: chrono::Utc::now().timestamp(),
        }
    }

    /// Start polling from a given timestamp instead of now.
    pub fn with_cursor(mut self, cursor: i64) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Start the polling loop. Never returns.
    pub async fn run(mut self) {
        tracing::info!(
            "Homework monitor started, cursor={}, period={}s",
            self.cursor,
            self.retry_period.as_secs()
        );

        loop {
            self.tick().await;
            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// One iteration with error reporting: faults become chat notifications.
    pub async fn tick(&mut self) -> Option<PollOutcome> {
        match self.poll_once().await {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                tracing::error!("Homework check failed: {}", e);
                self.notifier.deliver(&fault_message(&e)).await;
                None
            }
        }
    }

    /// Fetch, validate, notify and advance the cursor. Nothing is sent unless
    /// the whole payload checks out.
    pub async fn poll_once(&mut self) -> Result<PollOutcome, BotError> {
        let reply = match self.api.fetch(self.cursor).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("Homework API request failed, skipping cycle: {}", e);
                return Ok(PollOutcome::Skipped);
            }
        };

        if !ACCEPTED_STATUSES.contains(&reply.status) {
            return Err(BotError::BadResponse(reply.status));
        }

        let payload: Value = match serde_json::from_str(&reply.body) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Failed to decode homework API response as JSON, skipping cycle: {}", e);
                return Ok(PollOutcome::Skipped);
            }
        };

        let message = match check_response(&payload)? {
            Some(homework) => Some(parse_status(homework)?),
            None => None,
        };

        // Checked before delivery so a broken payload only produces the fault message
        let current_date = payload
            .get("current_date")
            .and_then(Value::as_i64)
            .ok_or_else(|| BotError::Shape("current_date is missing".to_string()))?;

        let outcome = match message {
            Some(message) => {
                self.notifier.deliver(&message).await;
                PollOutcome::Notified(message)
            }
            None => PollOutcome::NoUpdates,
        };
        self.advance_cursor(current_date);

        Ok(outcome)
    }

    fn advance_cursor(&mut self, current_date: i64) {
        if current_date < self.cursor {
            tracing::warn!(
                "Server reported current_date={} behind cursor={}, keeping cursor",
                current_date,
                self.cursor
            );
            return;
        }
        if current_date != self.cursor {
            tracing::info!("Cursor moved {} -> {}", self.cursor, current_date);
        }
        self.cursor = current_date;
    }
}
