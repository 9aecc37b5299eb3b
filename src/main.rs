use std::fs::File;
use std::sync::{Arc, Mutex};

use homework_status_bot::config::Config;
use homework_status_bot::services::monitor::MonitorEngine;
use homework_status_bot::services::practicum::PracticumClient;
use homework_status_bot::services::telegram::{Notifier, TelegramClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    // Log file is truncated on every start
    let log_path = Config::log_file_from_env();
    let (file_layer, log_error) = match File::create(&log_path) {
        Ok(file) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(false),
            ),
            None,
        ),
        Err(e) => (None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_status_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    if let Some(e) = log_error {
        tracing::warn!("Cannot open log file {}: {}, logging to stdout only", log_path, e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("CRITICAL: {}. Bot stopped.", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Loaded configuration: {:?}", config);

    let api = Arc::new(PracticumClient::new(&config));
    let notifier = Notifier::new(Arc::new(TelegramClient::new(&config)), &config);

    MonitorEngine::new(api, notifier, &config).run().await;
}
